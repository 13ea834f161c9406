#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Sizes and padding are unsigned pixel counts. Rect edges are signed so a
//! degraded layout can report an edge left of (or above) the origin instead of
//! silently wrapping. Sub-pixel positions use [`Point`], which only becomes an
//! integer rect through [`Rect::centered_at`].

/// A rectangle in pixel coordinates (origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Create a rectangle of `size` whose center is as close to `center` as
    /// whole pixels allow.
    ///
    /// Only the left/top edge is rounded; right/bottom are derived from the
    /// size, so the result is always exactly `size`.
    pub fn centered_at(center: Point, size: Size) -> Self {
        let left = (center.x - size.width as f32 / 2.0).round() as i32;
        let top = (center.y - size.height as f32 / 2.0).round() as i32;
        Self::new(left, top, size.width, size.height)
    }

    /// Left edge (inclusive). Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (inclusive). Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add_unsigned(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add_unsigned(self.height)
    }

    /// Width and height as a [`Size`].
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if `other` lies entirely within this rectangle.
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Exact midpoint, without integer truncation.
    #[inline]
    pub fn exact_center(&self) -> Point {
        Point::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Create a new rectangle inside the current one with the given padding.
    pub fn inner(&self, padding: Sides) -> Rect {
        let x = self.x.saturating_add_unsigned(padding.left);
        let y = self.y.saturating_add_unsigned(padding.top);
        let width = self
            .width
            .saturating_sub(padding.left)
            .saturating_sub(padding.right);
        let height = self
            .height
            .saturating_sub(padding.top)
            .saturating_sub(padding.bottom);

        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Shrink each axis to at most `bound`. Never grows.
    #[inline]
    #[must_use]
    pub fn clamp_max(self, bound: Size) -> Size {
        Size::new(self.width.min(bound.width), self.height.min(bound.height))
    }

    /// Component-wise saturating addition.
    #[inline]
    #[must_use]
    pub fn saturating_add(self, other: Size) -> Size {
        Size::new(
            self.width.saturating_add(other.width),
            self.height.saturating_add(other.height),
        )
    }

    /// Component-wise saturating subtraction.
    #[inline]
    #[must_use]
    pub fn saturating_sub(self, other: Size) -> Size {
        Size::new(
            self.width.saturating_sub(other.width),
            self.height.saturating_sub(other.height),
        )
    }

    /// Check if either axis is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl From<(u32, u32)> for Size {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// A sub-pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Sides for padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sides {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: u32) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with horizontal values only.
    pub const fn horizontal(val: u32) -> Self {
        Self {
            top: 0,
            right: val,
            bottom: 0,
            left: val,
        }
    }

    /// Create new sides with vertical values only.
    pub const fn vertical(val: u32) -> Self {
        Self {
            top: val,
            right: 0,
            bottom: val,
            left: 0,
        }
    }

    /// Create new sides with specific values.
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Total padding as a size (horizontal sum, vertical sum).
    #[inline]
    pub const fn total(&self) -> Size {
        Size::new(self.horizontal_sum(), self.vertical_sum())
    }
}

impl From<u32> for Sides {
    fn from(val: u32) -> Self {
        Self::all(val)
    }
}

impl From<(u32, u32)> for Sides {
    fn from((vertical, horizontal): (u32, u32)) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl From<(u32, u32, u32, u32)> for Sides {
    fn from((top, right, bottom, left): (u32, u32, u32, u32)) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}
