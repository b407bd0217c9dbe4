#![forbid(unsafe_code)]

//! The fixed color lookup tables and their resolution rules.
//!
//! Each table has 16 entries indexed by [`EdgeStyle::table_index`]. `None` is
//! the "draw no line" sentinel. The values reproduce the legacy engine's
//! truth tables exactly and are part of the engine's compatibility surface;
//! do not "clean them up".
//!
//! For the normal palette the per-style assignments are:
//!
//! ```text
//! style |  LTI  |  LTO  |  RBI  |  RBO
//! ------+-------+-------+-------+-------
//!  0000 |   -   |   -   |   -   |   -
//!  0001 |   -   | light | shdw  |  dark      (raised outer)
//!  0010 |   -   | shdw  |   -   | hilite     (sunken outer)
//!  0011 |   -   |   -   |   -   |   -        (half style)
//!  0100 |   -   | hilite|   -   | shdw       (raised inner)
//!  0101 | hilite| light | shdw  |  dark      (RAISED)
//!  0110 | hilite| shdw  | shdw  | hilite     (ETCHED)
//!  0111 |   -   |   -   |   -   |   -
//!  1000 |   -   |  dark |   -   | light      (sunken inner)
//!  1001 |  dark | light | light |  dark      (BUMP)
//!  1010 |  dark | shdw  | light | hilite     (SUNKEN)
//!  1011 |   -   |   -   |   -   |   -
//!  11xx |   -   |   -   |   -   |   -        (half/invalid inner field)
//! ```
//!
//! (LTI/LTO = left-top inner/outer line, RBI/RBO = right-bottom inner/outer
//! line. Read the actual constants for the soft, mono, and flat variants.)

use chamfer_core::flags::{BorderFlags, EdgeStyle};

use crate::theme::SystemColor;

// Shorthand for the table grids below.
const X: Option<SystemColor> = None;
const HI: Option<SystemColor> = Some(SystemColor::Highlight);
const LI: Option<SystemColor> = Some(SystemColor::Light);
const FA: Option<SystemColor> = Some(SystemColor::Face);
const SH: Option<SystemColor> = Some(SystemColor::Shadow);
const DK: Option<SystemColor> = Some(SystemColor::DarkShadow);
const WN: Option<SystemColor> = Some(SystemColor::Window);
const WF: Option<SystemColor> = Some(SystemColor::WindowFrame);

#[rustfmt::skip]
pub const LT_INNER_NORMAL: [Option<SystemColor>; 16] = [
    X,  X,  X,  X,
    X,  HI, HI, X,
    X,  DK, DK, X,
    X,  X,  X,  X,
];

#[rustfmt::skip]
pub const LT_OUTER_NORMAL: [Option<SystemColor>; 16] = [
    X,  LI, SH, X,
    HI, LI, SH, X,
    DK, LI, SH, X,
    X,  LI, SH, X,
];

#[rustfmt::skip]
pub const RB_INNER_NORMAL: [Option<SystemColor>; 16] = [
    X,  X,  X,  X,
    X,  SH, SH, X,
    X,  LI, LI, X,
    X,  X,  X,  X,
];

#[rustfmt::skip]
pub const RB_OUTER_NORMAL: [Option<SystemColor>; 16] = [
    X,  DK, HI, X,
    SH, DK, HI, X,
    LI, DK, HI, X,
    X,  DK, HI, X,
];

#[rustfmt::skip]
pub const LT_INNER_SOFT: [Option<SystemColor>; 16] = [
    X,  X,  X,  X,
    X,  LI, LI, X,
    X,  SH, SH, X,
    X,  X,  X,  X,
];

#[rustfmt::skip]
pub const LT_OUTER_SOFT: [Option<SystemColor>; 16] = [
    X,  HI, DK, X,
    LI, HI, DK, X,
    SH, HI, DK, X,
    X,  HI, DK, X,
];

// The soft palette only inverts the light direction for the top-left lines.
pub const RB_INNER_SOFT: [Option<SystemColor>; 16] = RB_INNER_NORMAL;
pub const RB_OUTER_SOFT: [Option<SystemColor>; 16] = RB_OUTER_NORMAL;

#[rustfmt::skip]
pub const LTRB_OUTER_MONO: [Option<SystemColor>; 16] = [
    X,  WF, WF, WF,
    WN, WF, WF, WF,
    WN, WF, WF, WF,
    WN, WF, WF, WF,
];

#[rustfmt::skip]
pub const LTRB_INNER_MONO: [Option<SystemColor>; 16] = [
    X,  X,  X,  X,
    X,  WN, WN, WN,
    X,  WN, WN, WN,
    X,  WN, WN, WN,
];

#[rustfmt::skip]
pub const LTRB_OUTER_FLAT: [Option<SystemColor>; 16] = [
    X,  SH, SH, SH,
    FA, SH, SH, SH,
    FA, SH, SH, SH,
    FA, SH, SH, SH,
];

#[rustfmt::skip]
pub const LTRB_INNER_FLAT: [Option<SystemColor>; 16] = [
    X,  X,  X,  X,
    X,  FA, FA, FA,
    X,  FA, FA, FA,
    X,  FA, FA, FA,
];

/// The four quadrant line colors for a rectangular edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeColors {
    pub lt_inner: Option<SystemColor>,
    pub lt_outer: Option<SystemColor>,
    pub rb_inner: Option<SystemColor>,
    pub rb_outer: Option<SystemColor>,
}

/// Resolve the quadrant colors for [`crate::draw_border`].
///
/// Pure in `(style & 0xF, flags)`. Modifier priority is MONO over FLAT over
/// SOFT over normal.
pub fn rect_edge_colors(style: EdgeStyle, flags: BorderFlags) -> EdgeColors {
    let i = style.table_index();

    if flags.contains(BorderFlags::MONO) {
        EdgeColors {
            lt_inner: LTRB_INNER_MONO[i],
            lt_outer: LTRB_OUTER_MONO[i],
            rb_inner: LTRB_INNER_MONO[i],
            rb_outer: LTRB_OUTER_MONO[i],
        }
    } else if flags.contains(BorderFlags::FLAT) {
        // Legacy rule: a present flat inner line is always face-colored,
        // independent of the table value.
        let inner = LTRB_INNER_FLAT[i].map(|_| SystemColor::Face);
        EdgeColors {
            lt_inner: inner,
            lt_outer: LTRB_OUTER_FLAT[i],
            rb_inner: inner,
            rb_outer: LTRB_OUTER_FLAT[i],
        }
    } else if flags.contains(BorderFlags::SOFT) {
        EdgeColors {
            lt_inner: LT_INNER_SOFT[i],
            lt_outer: LT_OUTER_SOFT[i],
            rb_inner: RB_INNER_SOFT[i],
            rb_outer: RB_OUTER_SOFT[i],
        }
    } else {
        EdgeColors {
            lt_inner: LT_INNER_NORMAL[i],
            lt_outer: LT_OUTER_NORMAL[i],
            rb_inner: RB_INNER_NORMAL[i],
            rb_outer: RB_OUTER_NORMAL[i],
        }
    }
}

/// Resolve the `(inner, outer)` colors for [`crate::draw_diagonal_border`].
///
/// `bottom_side` selects the mirrored right-bottom tables: the soft and
/// normal palettes invert the simulated light per side, not per quadrant.
/// The flat face-forcing rule of [`rect_edge_colors`] does not apply here;
/// the legacy engine only forces it for rectangular edges.
pub fn diag_edge_colors(
    style: EdgeStyle,
    flags: BorderFlags,
    bottom_side: bool,
) -> (Option<SystemColor>, Option<SystemColor>) {
    let i = style.table_index();

    if flags.contains(BorderFlags::MONO) {
        (LTRB_INNER_MONO[i], LTRB_OUTER_MONO[i])
    } else if flags.contains(BorderFlags::FLAT) {
        (LTRB_INNER_FLAT[i], LTRB_OUTER_FLAT[i])
    } else if flags.contains(BorderFlags::SOFT) {
        if bottom_side {
            (RB_INNER_SOFT[i], RB_OUTER_SOFT[i])
        } else {
            (LT_INNER_SOFT[i], LT_OUTER_SOFT[i])
        }
    } else if bottom_side {
        (RB_INNER_NORMAL[i], RB_OUTER_NORMAL[i])
    } else {
        (LT_INNER_NORMAL[i], LT_OUTER_NORMAL[i])
    }
}

/// Per-edge consumed thickness in pixels: one per line that exists for this
/// style code.
///
/// Always read from the mono tables regardless of the palette actually drawn.
/// This is the legacy rule fixing the `ADJUST` shrink amount: width is
/// governed by whether a line *would* exist in mono terms, not by which
/// palette painted it.
pub fn frame_width(style: EdgeStyle) -> i32 {
    let i = style.table_index();
    i32::from(LTRB_INNER_MONO[i].is_some()) + i32::from(LTRB_OUTER_MONO[i].is_some())
}
