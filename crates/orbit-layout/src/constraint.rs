#![forbid(unsafe_code)]

//! Per-axis measurement constraints and size resolution.

/// How the host constrains one axis of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureConstraint {
    /// The axis size is fixed by the caller.
    Exact(u32),
    /// Size to content, but never beyond this bound.
    AtMost(u32),
    /// Size to content with no upper bound.
    #[default]
    Unconstrained,
}

impl MeasureConstraint {
    /// The fixed size, if this is an [`Exact`](Self::Exact) constraint.
    #[inline]
    pub const fn exact(self) -> Option<u32> {
        match self {
            Self::Exact(size) => Some(size),
            Self::AtMost(_) | Self::Unconstrained => None,
        }
    }

    /// Constraint handed to a content-sized child after removing `padding`
    /// from this axis.
    ///
    /// Any finite bound becomes [`AtMost`](Self::AtMost) the remaining space;
    /// children never inherit an exact size from the container.
    #[must_use]
    pub const fn for_child(self, padding: u32) -> Self {
        match self {
            Self::Exact(size) | Self::AtMost(size) => Self::AtMost(size.saturating_sub(padding)),
            Self::Unconstrained => Self::Unconstrained,
        }
    }

    /// Resolve a content-driven preferred size against this constraint the way
    /// a child does.
    #[inline]
    pub fn fit(self, preferred: u32) -> u32 {
        match self {
            Self::Exact(size) => size,
            Self::AtMost(size) => preferred.min(size),
            Self::Unconstrained => preferred,
        }
    }
}

/// Outcome of resolving a desired length against a [`MeasureConstraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedLength {
    /// The size the container takes on this axis.
    pub value: u32,
    /// Set when an `AtMost` bound cut the desired size.
    pub too_small: bool,
}

/// Resolve the container's desired length on one axis.
///
/// `Exact` always wins, `AtMost` caps (and flags the cut), `Unconstrained`
/// takes the desired length as is.
///
/// ```
/// use orbit_layout::{MeasureConstraint, resolve_size};
///
/// assert_eq!(resolve_size(420, MeasureConstraint::Exact(300)).value, 300);
/// assert!(resolve_size(420, MeasureConstraint::AtMost(300)).too_small);
/// assert_eq!(resolve_size(40, MeasureConstraint::Unconstrained).value, 40);
/// ```
pub fn resolve_size(desired: u32, constraint: MeasureConstraint) -> ResolvedLength {
    match constraint {
        MeasureConstraint::Exact(size) => ResolvedLength {
            value: size,
            too_small: false,
        },
        MeasureConstraint::AtMost(size) => ResolvedLength {
            value: desired.min(size),
            too_small: desired > size,
        },
        MeasureConstraint::Unconstrained => ResolvedLength {
            value: desired,
            too_small: false,
        },
    }
}
