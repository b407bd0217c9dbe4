#![forbid(unsafe_code)]

//! Style codes and border flags.
//!
//! The numeric values are the legacy wire format and must not be renumbered:
//! the color lookup tables in `chamfer-draw` are indexed by the low four bits
//! of [`EdgeStyle`], and callers exchange [`BorderFlags`] values with code
//! that still speaks the original constants.

bitflags::bitflags! {
    /// The 4-bit edge style code: two 2-bit fields, one for the outer bevel
    /// line and one for the inner bevel line.
    ///
    /// A field with both its raised and sunken bits set (the generic
    /// [`EdgeStyle::OUTER`] / [`EdgeStyle::INNER`] masks) is a "half" style:
    /// it only renders under [`BorderFlags::FLAT`] or [`BorderFlags::MONO`],
    /// and the renderers report it as not fully paintable otherwise.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EdgeStyle: u32 {
        const RAISED_OUTER = 0b0001;
        const SUNKEN_OUTER = 0b0010;
        const RAISED_INNER = 0b0100;
        const SUNKEN_INNER = 0b1000;

        /// Generic outer-bevel mask ("half" style on its own).
        const OUTER = Self::RAISED_OUTER.bits() | Self::SUNKEN_OUTER.bits();
        /// Generic inner-bevel mask ("half" style on its own).
        const INNER = Self::RAISED_INNER.bits() | Self::SUNKEN_INNER.bits();

        /// Full raised bevel (buttons in their rest state).
        const RAISED = Self::RAISED_OUTER.bits() | Self::RAISED_INNER.bits();
        /// Full sunken bevel (pressed buttons, wells).
        const SUNKEN = Self::SUNKEN_OUTER.bits() | Self::SUNKEN_INNER.bits();
        /// Sunken outer, raised inner (group-box grooves).
        const ETCHED = Self::SUNKEN_OUTER.bits() | Self::RAISED_INNER.bits();
        /// Raised outer, sunken inner (ridges).
        const BUMP = Self::RAISED_OUTER.bits() | Self::SUNKEN_INNER.bits();
    }
}

impl EdgeStyle {
    /// Index into the 16-entry color lookup tables.
    ///
    /// Bits outside the 4-bit style code are ignored.
    #[inline]
    pub const fn table_index(self) -> usize {
        (self.bits() & 0xF) as usize
    }
}

bitflags::bitflags! {
    /// Side mask and appearance/behavior modifiers for border drawing.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BorderFlags: u32 {
        const LEFT = 0x0001;
        const TOP = 0x0002;
        const RIGHT = 0x0004;
        const BOTTOM = 0x0008;
        /// All four sides.
        const RECT = Self::LEFT.bits()
            | Self::TOP.bits()
            | Self::RIGHT.bits()
            | Self::BOTTOM.bits();

        /// Both sides of the top-left corner; when both are selected the
        /// adjoining inner lines are shortened by one pixel at the miter.
        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();

        /// Diagonal bevel rather than a rectangular border.
        const DIAGONAL = 0x0010;

        /// Fill the interior after drawing the edges.
        const MIDDLE = 0x0800;
        /// Alternate palette simulating light from below.
        const SOFT = 0x1000;
        /// Shrink the caller's rectangle by the consumed border thickness.
        const ADJUST = 0x2000;
        /// Single flat-looking bevel; both lines take the face color family.
        const FLAT = 0x4000;
        /// Black-and-white frame and face, ignoring the theme.
        const MONO = 0x8000;
    }
}

impl BorderFlags {
    /// The side bits only.
    #[inline]
    pub const fn sides(self) -> BorderFlags {
        self.intersection(BorderFlags::RECT)
    }
}

/// Which corner a diagonal bevel ends in.
///
/// The diagonal always spans the shorter dimension of the rectangle; the
/// orientation fixes both its direction and the pair of rectangle sides it
/// hugs (which are also the sides consumed by [`BorderFlags::ADJUST`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagonalEnd {
    BottomLeft,
    BottomRight,
    TopRight,
    TopLeft,
}

impl DiagonalEnd {
    /// The two rectangle sides this orientation runs along.
    #[inline]
    pub const fn sides(self) -> BorderFlags {
        match self {
            DiagonalEnd::BottomLeft => BorderFlags::BOTTOM_LEFT,
            DiagonalEnd::BottomRight => BorderFlags::BOTTOM_RIGHT,
            DiagonalEnd::TopRight => BorderFlags::TOP_RIGHT,
            DiagonalEnd::TopLeft => BorderFlags::TOP_LEFT,
        }
    }

    /// All four orientations, for exhaustive sweeps in tests and tools.
    pub const ALL: [DiagonalEnd; 4] = [
        DiagonalEnd::BottomLeft,
        DiagonalEnd::BottomRight,
        DiagonalEnd::TopRight,
        DiagonalEnd::TopLeft,
    ];
}
