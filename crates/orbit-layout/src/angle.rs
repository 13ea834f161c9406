#![forbid(unsafe_code)]

//! Angle and circle helpers.
//!
//! Angles are in degrees, measured clockwise from the positive x axis in
//! screen coordinates (y grows downward). A baseline of [`TOP_BASELINE`]
//! therefore puts orbit index 0 at twelve o'clock.

use orbit_core::geometry::Point;

/// Baseline that starts the orbit at the top of the circle.
pub const TOP_BASELINE: f32 = -90.0;

/// Baseline that starts the orbit at three o'clock (plain trigonometric zero).
pub const EAST_BASELINE: f32 = 0.0;

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Configured angle of orbit slot `index` out of `count`: `360 * index / count + offset`,
/// reduced to `[0, 360)`.
///
/// The offset is reduced before the slot step is added, so slots stay evenly
/// spaced for any finite offset. The baseline is not included. Returns `None`
/// when `count` is zero.
///
/// ```
/// use orbit_layout::angle::orbit_angle;
///
/// assert_eq!(orbit_angle(2, 4, 10.0), Some(190.0));
/// assert_eq!(orbit_angle(3, 4, -45.0), Some(225.0));
/// assert_eq!(orbit_angle(0, 0, 10.0), None);
/// ```
pub fn orbit_angle(index: usize, count: usize, offset: f32) -> Option<f32> {
    if count == 0 {
        return None;
    }
    let step = 360.0 * index as f64 / count as f64;
    let offset = f64::from(offset).rem_euclid(360.0);
    let degrees = (step + offset).rem_euclid(360.0) as f32;
    // Values just under 360 in f64 can round up to 360 in f32.
    Some(if degrees >= 360.0 { 0.0 } else { degrees })
}

/// Reduce `degrees` to `[-180, 180)`.
///
/// ```
/// use orbit_layout::angle::signed_degrees;
///
/// assert_eq!(signed_degrees(-90.0), -90.0);
/// assert_eq!(signed_degrees(630.0), -90.0);
/// ```
pub fn signed_degrees(degrees: f32) -> f32 {
    let signed = ((f64::from(degrees) + 180.0).rem_euclid(360.0) - 180.0) as f32;
    if signed >= 180.0 { -180.0 } else { signed }
}

/// Point at `degrees` on the ellipse with radii `rx`/`ry` around `center`.
#[inline]
pub fn point_on_circle(center: Point, rx: f32, ry: f32, degrees: f32) -> Point {
    let radians = to_radians(degrees);
    Point::new(
        center.x + rx * radians.cos(),
        center.y + ry * radians.sin(),
    )
}
