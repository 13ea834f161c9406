#![forbid(unsafe_code)]

//! Placement: center point, clamped radii, orbit angles, final child rects.

use orbit_core::geometry::{Point, Rect, Size};
use orbit_core::{debug, debug_span, trace};

use crate::CircularLayout;
use crate::angle::{orbit_angle, point_on_circle, signed_degrees};
use crate::child::Group;
use crate::measure::PassState;

/// Final position of one visible child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index of the child in the sequence handed to `measure`.
    pub index: usize,
    /// Group the child was placed in.
    pub group: Group,
    /// Final rect in the same coordinate space as the container rect.
    pub rect: Rect,
    /// On-screen angle in degrees, baseline included. Orbit children only.
    ///
    /// The baseline is reduced to `[-180, 180)` and the configured angle to
    /// `[0, 360)` before they are added.
    pub angle: Option<f32>,
    /// Rotation to apply to the child in `[0, 360)`, baseline excluded. Only
    /// for orbit children that asked for it.
    pub rotation: Option<f32>,
}

/// Result of the placement phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    /// Midpoint of the padded content rect.
    pub center: Point,
    /// Orbit radius on the x and y axes after clamping.
    pub radius: (f32, f32),
    /// Center group first, then orbit group, each in original order.
    pub placements: Vec<Placement>,
}

impl Arrangement {
    /// Placement of the child at `index`, if it was visible.
    pub fn get(&self, index: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.index == index)
    }

    /// Placements of one group, in original order.
    pub fn group(&self, group: Group) -> impl Iterator<Item = &Placement> {
        self.placements.iter().filter(move |p| p.group == group)
    }

    /// Number of emitted placements.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Available size for center children: room left after reserving a full
/// orbit footprint on each side.
pub(crate) fn center_bound(content: Size, max_orbit: Size) -> Size {
    content.saturating_sub(max_orbit.saturating_add(max_orbit))
}

/// Available size for orbit child centers: half an orbit footprint is kept
/// free on each side.
pub(crate) fn orbit_bound(content: Size, max_orbit: Size) -> Size {
    content.saturating_sub(max_orbit)
}

/// Ideal radius on one axis, clamped to the available bound.
pub(crate) fn clamped_radius(diameter: u32, max_center: u32, available: u32) -> f32 {
    let ideal = (diameter as f32 + max_center as f32) / 2.0;
    ideal.min(available as f32 / 2.0)
}

pub(crate) fn place_children(
    layout: &CircularLayout,
    pass: PassState,
    bounds: Rect,
) -> Arrangement {
    let _span = debug_span!(
        "circular_place",
        x = bounds.x,
        y = bounds.y,
        w = bounds.width,
        h = bounds.height
    )
    .entered();

    let content = bounds.inner(layout.padding);
    let center = content.exact_center();
    let max_orbit = pass.max_orbit();
    let max_center = pass.max_center();

    let mut placements = Vec::with_capacity(pass.center().len() + pass.orbit().len());

    let bound = center_bound(content.size(), max_orbit);
    for child in pass.center() {
        let size = child.size.clamp_max(bound);
        let rect = Rect::centered_at(center, size);
        trace!(
            index = child.index,
            x = rect.x,
            y = rect.y,
            w = rect.width,
            h = rect.height,
            "placed center child"
        );
        placements.push(Placement {
            index: child.index,
            group: Group::Center,
            rect,
            angle: None,
            rotation: None,
        });
    }

    let bound = orbit_bound(content.size(), max_orbit);
    let radius = (
        clamped_radius(pass.diameter(), max_center.width, bound.width),
        clamped_radius(pass.diameter(), max_center.height, bound.height),
    );

    let baseline = signed_degrees(layout.baseline_angle);
    let count = pass.orbit().len();
    for (i, child) in pass.orbit().iter().enumerate() {
        let Some(configured) = orbit_angle(i, count, layout.offset_angle) else {
            break;
        };
        let angle = baseline + configured;
        let point = point_on_circle(center, radius.0, radius.1, angle);
        let rect = Rect::centered_at(point, child.size);
        trace!(index = child.index, angle, x = rect.x, y = rect.y, "placed orbit child");
        if !content.contains_rect(&rect) {
            debug!(index = child.index, "orbit child overhangs content");
        }
        placements.push(Placement {
            index: child.index,
            group: Group::Orbit,
            rect,
            angle: Some(angle),
            rotation: child.rotate.then_some(configured),
        });
    }

    debug!(
        cx = center.x,
        cy = center.y,
        rx = radius.0,
        ry = radius.1,
        placed = placements.len(),
        "place complete"
    );

    Arrangement {
        center,
        radius,
        placements,
    }
}
