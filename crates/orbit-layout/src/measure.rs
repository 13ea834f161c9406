#![forbid(unsafe_code)]

//! Measurement: group children, track group extents, negotiate the diameter.

use orbit_core::geometry::Size;
use orbit_core::{debug, debug_span, trace};

use crate::CircularLayout;
use crate::child::{ChildSpec, Group};
use crate::constraint::{MeasureConstraint, ResolvedLength, resolve_size};

/// A visible child after measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasuredChild {
    /// Index of the child in the sequence handed to `measure`.
    pub index: usize,
    /// Measured size.
    pub size: Size,
    /// Copied from [`ChildSpec::rotate`].
    pub rotate: bool,
}

/// Everything measurement hands to placement.
///
/// Built fresh by every `measure` call and consumed by `place`. Not `Clone`:
/// each pass is placed exactly once.
#[derive(Debug, PartialEq, Default)]
pub struct PassState {
    center: Vec<MeasuredChild>,
    orbit: Vec<MeasuredChild>,
    max_center: Size,
    max_orbit: Size,
    diameter: u32,
}

impl PassState {
    /// Visible center children, in original order.
    pub fn center(&self) -> &[MeasuredChild] {
        &self.center
    }

    /// Visible orbit children, in original order.
    pub fn orbit(&self) -> &[MeasuredChild] {
        &self.orbit
    }

    /// Largest width and height over the center group (zero when empty).
    pub fn max_center(&self) -> Size {
        self.max_center
    }

    /// Largest width and height over the orbit group (zero when empty).
    pub fn max_orbit(&self) -> Size {
        self.max_orbit
    }

    /// Negotiated diameter of the orbit circle.
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Whether no visible child was measured.
    pub fn is_empty(&self) -> bool {
        self.center.is_empty() && self.orbit.is_empty()
    }

    fn push(&mut self, group: Group, child: MeasuredChild) {
        match group {
            Group::Center => {
                self.max_center = self.max_center.max(child.size);
                self.center.push(child);
            }
            Group::Orbit => {
                self.max_orbit = self.max_orbit.max(child.size);
                self.orbit.push(child);
            }
        }
    }
}

/// Container size resolved against both axis constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedSize {
    pub width: ResolvedLength,
    pub height: ResolvedLength,
}

impl ResolvedSize {
    /// The resolved width and height.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width.value, self.height.value)
    }

    /// Whether an `AtMost` bound cut either axis.
    #[inline]
    pub const fn too_small(&self) -> bool {
        self.width.too_small || self.height.too_small
    }
}

/// Result of the measurement phase.
#[derive(Debug, PartialEq)]
pub struct Measured {
    /// Size the container asks for before constraint resolution.
    pub desired: Size,
    /// Size after resolving `desired` against the constraints.
    pub resolved: ResolvedSize,
    /// State threaded into placement.
    pub pass: PassState,
}

/// Container size from a full pass: what was asked for and what was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeasuredSize {
    /// Size the container asked for before constraint resolution.
    pub desired: Size,
    /// Size after resolving `desired` against the constraints.
    pub resolved: ResolvedSize,
}

impl MeasuredSize {
    /// The resolved width and height.
    #[inline]
    pub const fn size(&self) -> Size {
        self.resolved.size()
    }

    /// Whether an `AtMost` bound cut either axis.
    #[inline]
    pub const fn too_small(&self) -> bool {
        self.resolved.too_small()
    }
}

impl Measured {
    /// Split off the sizes, leaving the pass state for placement.
    pub fn into_parts(self) -> (MeasuredSize, PassState) {
        let size = MeasuredSize {
            desired: self.desired,
            resolved: self.resolved,
        };
        (size, self.pass)
    }
}

/// Diameter of the orbit circle from the constraint modes and orbit extents.
///
/// An exact width fixes the diameter; otherwise the widest orbit child does.
/// An exact height can then only shrink it, while a content-driven height can
/// only grow it.
pub(crate) fn negotiate_diameter(
    width: MeasureConstraint,
    height: MeasureConstraint,
    max_orbit: Size,
) -> u32 {
    let diameter = width.exact().unwrap_or(max_orbit.width);
    match height.exact() {
        Some(size) => diameter.min(size),
        None => diameter.max(max_orbit.height),
    }
}

pub(crate) fn measure_children<F>(
    layout: &CircularLayout,
    children: &[ChildSpec],
    width: MeasureConstraint,
    height: MeasureConstraint,
    mut measurer: F,
) -> Measured
where
    F: FnMut(usize, &ChildSpec, MeasureConstraint, MeasureConstraint) -> Size,
{
    let _span = debug_span!(
        "circular_measure",
        children = children.len(),
        width = ?width,
        height = ?height
    )
    .entered();

    let padding = layout.padding;
    let child_width = width.for_child(padding.horizontal_sum());
    let child_height = height.for_child(padding.vertical_sum());

    let mut pass = PassState::default();
    for (index, child) in children.iter().enumerate() {
        if !child.visible {
            trace!(index, "skipping invisible child");
            continue;
        }
        let size = measurer(index, child, child_width, child_height);
        trace!(
            index,
            group = ?child.group(),
            w = size.width,
            h = size.height,
            "measured child"
        );
        pass.push(
            child.group(),
            MeasuredChild {
                index,
                size,
                rotate: child.rotate,
            },
        );
    }

    pass.diameter = if pass.is_empty() {
        0
    } else if let Some(radius) = layout.radius {
        radius.saturating_mul(2)
    } else {
        negotiate_diameter(width, height, pass.max_orbit)
    };

    let desired = Size::new(
        pass.diameter
            .saturating_add(pass.max_center.width)
            .saturating_add(pass.max_orbit.width),
        pass.diameter
            .saturating_add(pass.max_center.height)
            .saturating_add(pass.max_orbit.height),
    )
    .saturating_add(padding.total())
    .max(layout.min_size);

    let resolved = ResolvedSize {
        width: resolve_size(desired.width, width),
        height: resolve_size(desired.height, height),
    };

    debug!(
        center = pass.center.len(),
        orbit = pass.orbit.len(),
        diameter = pass.diameter,
        desired_w = desired.width,
        desired_h = desired.height,
        w = resolved.width.value,
        h = resolved.height.value,
        "measure complete"
    );
    if resolved.too_small() {
        debug!(
            desired_w = desired.width,
            desired_h = desired.height,
            "desired size cut by constraint"
        );
    }

    Measured {
        desired,
        resolved,
        pass,
    }
}
