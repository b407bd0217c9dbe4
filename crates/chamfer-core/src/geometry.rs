#![forbid(unsafe_code)]

//! Geometric primitives on the legacy pixel grid.

/// A pixel position (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in edge form, right/bottom exclusive.
///
/// Edge form (rather than origin + size) matches the renderers, which address
/// individual border rows and columns; coordinates may go negative while a
/// diagonal derivation reaches one pixel outside the rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub left: i32,
    /// Top edge (inclusive).
    pub top: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// Create a new rectangle from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// Width in pixels (zero when inverted).
    #[inline]
    pub const fn width(&self) -> i32 {
        let w = self.right - self.left;
        if w > 0 { w } else { 0 }
    }

    /// Height in pixels (zero when inverted).
    #[inline]
    pub const fn height(&self) -> i32 {
        let h = self.bottom - self.top;
        if h > 0 { h } else { 0 }
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }

    /// Translate the rectangle by a pixel delta.
    #[inline]
    pub const fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Grow (positive delta) or shrink (negative delta) around the center.
    #[inline]
    pub const fn inflate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.left - dx,
            self.top - dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Compute the intersection with another rectangle, returning `None` if
    /// the rectangles don't overlap.
    #[inline]
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);

        if left < right && top < bottom {
            Some(Rect::new(left, top, right, bottom))
        } else {
            None
        }
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }

    /// The largest square that fits, centered along the longer axis, together
    /// with its side length.
    ///
    /// Centering rounds toward the near edge on odd leftovers, matching the
    /// legacy engine's square-glyph placement.
    pub const fn centered_square(&self) -> (Rect, i32) {
        let width = self.right - self.left;
        let height = self.bottom - self.top;
        let side = if width > height { height } else { width };

        let mut square = *self;
        if width < height {
            square.top += (height - width) / 2;
            square.bottom = square.top + side;
        } else if width > height {
            square.left += (width - height) / 2;
            square.right = square.left + side;
        }

        (square, side)
    }
}
