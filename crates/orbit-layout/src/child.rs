#![forbid(unsafe_code)]

//! Immutable per-pass snapshot of a child element.

use orbit_core::geometry::Size;

use crate::constraint::MeasureConstraint;

/// Which placement group a child belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Group {
    /// Stacked at the shared midpoint.
    Center,
    /// Evenly spaced on the ring around the midpoint.
    Orbit,
}

/// What the host knows about one child at the start of a pass.
///
/// The host rebuilds these from its live elements every pass; nothing here
/// survives into the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChildSpec {
    /// Content-driven size before any constraint is applied.
    pub preferred: Size,
    /// Invisible children are left out of measurement and placement.
    pub visible: bool,
    /// Member of the center group instead of the orbit group.
    pub center: bool,
    /// Report a rotation that tracks the orbit angle.
    pub rotate: bool,
}

impl Default for ChildSpec {
    fn default() -> Self {
        Self {
            preferred: Size::ZERO,
            visible: true,
            center: false,
            rotate: false,
        }
    }
}

impl ChildSpec {
    /// A visible orbit child.
    pub const fn orbit(width: u32, height: u32) -> Self {
        Self {
            preferred: Size::new(width, height),
            visible: true,
            center: false,
            rotate: false,
        }
    }

    /// A visible center child.
    pub const fn center(width: u32, height: u32) -> Self {
        Self {
            preferred: Size::new(width, height),
            visible: true,
            center: true,
            rotate: false,
        }
    }

    /// Mark the child invisible.
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Set visibility.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Request a rotation that tracks the orbit angle.
    #[must_use]
    pub const fn rotated(mut self) -> Self {
        self.rotate = true;
        self
    }

    /// The group this child is placed in.
    #[inline]
    pub const fn group(&self) -> Group {
        if self.center { Group::Center } else { Group::Orbit }
    }

    /// Measure the preferred size against per-axis child constraints.
    pub fn measure(&self, width: MeasureConstraint, height: MeasureConstraint) -> Size {
        Size::new(
            width.fit(self.preferred.width),
            height.fit(self.preferred.height),
        )
    }
}
