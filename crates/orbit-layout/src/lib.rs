#![forbid(unsafe_code)]

//! Circular layout: children stacked at a shared center or spaced evenly on a
//! ring around it.
//!
//! A layout pass has two phases:
//!
//! - [`CircularLayout::measure`] splits visible children into the center and
//!   orbit groups, records each group's largest extent, negotiates the orbit
//!   diameter and proposes a container size.
//! - [`CircularLayout::place`] takes the resulting [`PassState`] and the
//!   container's final rect and emits one [`Placement`] per visible child.
//!
//! The host adapts its live elements into [`ChildSpec`] snapshots each pass;
//! nothing is cached between passes.
//!
//! ```
//! use orbit_layout::{ChildSpec, CircularLayout, MeasureConstraint, Rect};
//!
//! let layout = CircularLayout::new();
//! let children = [
//!     ChildSpec::center(80, 80),
//!     ChildSpec::orbit(40, 40),
//!     ChildSpec::orbit(40, 40),
//!     ChildSpec::orbit(40, 40),
//!     ChildSpec::orbit(40, 40),
//! ];
//!
//! let measured = layout.measure(
//!     &children,
//!     MeasureConstraint::Exact(300),
//!     MeasureConstraint::Exact(300),
//! );
//! let bounds = Rect::from_size(measured.resolved.size());
//! let arrangement = layout.place(measured.pass, bounds);
//!
//! // Index 1 is the first orbit child: twelve o'clock.
//! assert_eq!(arrangement.get(1).unwrap().rect, Rect::new(130, 0, 40, 40));
//! ```
//!
//! # Angle convention
//!
//! Angles are degrees, clockwise on screen from three o'clock. The orbit child
//! at visible position `i` of `n` sits at `baseline + 360 * i / n + offset`.
//! The default baseline is [`TOP_BASELINE`] (−90°), so index 0 starts at the
//! top; use [`EAST_BASELINE`] to start at three o'clock. Rotations reported for
//! children that ask for them exclude the baseline.

pub mod angle;
pub mod child;
pub mod constraint;
pub mod measure;
pub mod place;

use std::fmt;

pub use angle::{EAST_BASELINE, TOP_BASELINE};
pub use child::{ChildSpec, Group};
pub use constraint::{MeasureConstraint, ResolvedLength, resolve_size};
pub use measure::{Measured, MeasuredChild, MeasuredSize, PassState, ResolvedSize};
pub use orbit_core::geometry::{Point, Rect, Sides, Size};
pub use place::{Arrangement, Placement};

/// Configuration of a circular container.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CircularLayout {
    /// User offset added to every orbit angle, in degrees.
    pub offset_angle: f32,
    /// Angle at which orbit index 0 starts, in degrees.
    pub baseline_angle: f32,
    /// Space kept free inside the container edges.
    pub padding: Sides,
    /// Floor for the proposed container size.
    pub min_size: Size,
    /// Fixed orbit radius replacing diameter negotiation.
    pub radius: Option<u32>,
}

impl Default for CircularLayout {
    fn default() -> Self {
        Self {
            offset_angle: 0.0,
            baseline_angle: TOP_BASELINE,
            padding: Sides::default(),
            min_size: Size::ZERO,
            radius: None,
        }
    }
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl CircularLayout {
    /// Create a layout with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user offset added to every orbit angle, in degrees.
    #[must_use]
    pub fn offset_angle(mut self, degrees: f32) -> Self {
        self.offset_angle = degrees;
        self
    }

    /// Set where orbit index 0 starts, in degrees.
    #[must_use]
    pub fn baseline_angle(mut self, degrees: f32) -> Self {
        self.baseline_angle = degrees;
        self
    }

    /// Set the container padding.
    #[must_use]
    pub fn padding(mut self, padding: Sides) -> Self {
        self.padding = padding;
        self
    }

    /// Set a floor for the proposed container size.
    #[must_use]
    pub fn min_size(mut self, size: Size) -> Self {
        self.min_size = size;
        self
    }

    /// Use a fixed orbit radius instead of negotiating the diameter.
    #[must_use]
    pub fn radius(mut self, radius: Option<u32>) -> Self {
        self.radius = radius;
        self
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        validate_finite("offset_angle", self.offset_angle, &mut errors);
        validate_finite("baseline_angle", self.baseline_angle, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Measure children using their preferred sizes.
    pub fn measure(
        &self,
        children: &[ChildSpec],
        width: MeasureConstraint,
        height: MeasureConstraint,
    ) -> Measured {
        measure::measure_children(self, children, width, height, |_, child, w, h| {
            child.measure(w, h)
        })
    }

    /// Measure children with sizes supplied by the host.
    ///
    /// The measurer receives the child index, its snapshot and the per-axis
    /// constraints (container constraint minus padding). It is never called
    /// for invisible children.
    pub fn measure_with_measurer<F>(
        &self,
        children: &[ChildSpec],
        width: MeasureConstraint,
        height: MeasureConstraint,
        measurer: F,
    ) -> Measured
    where
        F: FnMut(usize, &ChildSpec, MeasureConstraint, MeasureConstraint) -> Size,
    {
        measure::measure_children(self, children, width, height, measurer)
    }

    /// Place the children recorded in `pass` inside `bounds`.
    ///
    /// `bounds` is the container's final rect as resolved by the host.
    pub fn place(&self, pass: PassState, bounds: Rect) -> Arrangement {
        place::place_children(self, pass, bounds)
    }

    /// Run a full pass: measure, resolve, place at `origin`.
    ///
    /// The pass state is consumed by placement, so only the desired and
    /// resolved sizes come back alongside the arrangement.
    pub fn layout(
        &self,
        children: &[ChildSpec],
        width: MeasureConstraint,
        height: MeasureConstraint,
        origin: (i32, i32),
    ) -> (MeasuredSize, Arrangement) {
        let (size, pass) = self.measure(children, width, height).into_parts();
        let resolved = size.size();
        let bounds = Rect::new(origin.0, origin.1, resolved.width, resolved.height);
        (size, self.place(pass, bounds))
    }
}

fn validate_finite(field: &'static str, value: f32, errors: &mut Vec<ConfigError>) {
    if !value.is_finite() {
        errors.push(ConfigError::new(field, value.to_string(), "must be finite"));
    }
}
