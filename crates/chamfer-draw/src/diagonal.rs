#![forbid(unsafe_code)]

//! The diagonal edge renderer.
//!
//! The legacy engine derived the diagonal's coordinates in a wide switch over
//! flag combinations. Here each [`DiagonalEnd`] orientation owns its
//! derivation as data ([`DiagGeometry`]), so every orientation can be audited
//! and tested on its own. The one-pixel nudges are not symmetric between
//! orientations; they reproduce the observed output of the legacy engine and
//! must not be normalized.

use chamfer_core::flags::{BorderFlags, DiagonalEnd, EdgeStyle};
use chamfer_core::geometry::{Point, Rect};
use tracing::trace;

use crate::edge::{edge_is_paintable, middle_color};
use crate::surface::{PositionGuard, Surface, SurfaceError};
use crate::tables;

/// The per-orientation coordinate derivation for one rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DiagGeometry {
    /// Outer diagonal, start to end (endpoint exclusive).
    pub outer: (Point, Point),
    /// Inner diagonal, one pixel toward the interior.
    pub inner: (Point, Point),
    /// Interior fill bounded by the diagonal and the two nearer edges.
    ///
    /// Three orientations duplicate the last point, degenerating the quad to
    /// a triangle; this keeps the scan conversion correct at the diagonal's
    /// corner.
    pub fill: [Point; 4],
}

/// Derive the diagonal geometry for an orientation.
///
/// `add` is the consumed frame thickness; it nudges the fill polygon off the
/// bevel lines so the fill never paints over them.
pub(crate) fn derive(end: DiagonalEnd, rect: &Rect, add: i32) -> DiagGeometry {
    let diam = rect.width().min(rect.height());

    match end {
        DiagonalEnd::BottomLeft => {
            let ep = Point::new(rect.left - 1, rect.bottom);
            let sp = Point::new(ep.x + diam, ep.y - diam);
            let far = Point::new(ep.x + 1, ep.y - 1 - add);
            DiagGeometry {
                outer: (sp, ep),
                inner: (Point::new(sp.x - 1, sp.y), Point::new(ep.x, ep.y - 1)),
                fill: [
                    Point::new(sp.x - add, sp.y),
                    Point::new(rect.left, rect.top),
                    far,
                    far,
                ],
            }
        }
        DiagonalEnd::BottomRight => {
            let ep = Point::new(rect.left - 1, rect.top - 1);
            let sp = Point::new(ep.x + diam, ep.y + diam);
            let far = Point::new(ep.x + 1, ep.y + 1 + add);
            DiagGeometry {
                outer: (sp, ep),
                inner: (Point::new(sp.x - 1, sp.y), Point::new(ep.x, ep.y + 1)),
                fill: [
                    Point::new(sp.x - add, sp.y),
                    Point::new(rect.left, rect.bottom - 1),
                    far,
                    far,
                ],
            }
        }
        DiagonalEnd::TopRight => {
            let sp = Point::new(rect.left, rect.bottom - 1);
            let ep = Point::new(sp.x + diam, sp.y - diam);
            DiagGeometry {
                outer: (sp, ep),
                inner: (Point::new(sp.x + 1, sp.y), Point::new(ep.x, ep.y + 1)),
                fill: [
                    Point::new(ep.x - 1, ep.y + 1 + add),
                    Point::new(rect.right - 1, rect.top + add),
                    Point::new(rect.right - 1, rect.bottom - 1),
                    Point::new(sp.x + add, sp.y),
                ],
            }
        }
        DiagonalEnd::TopLeft => {
            let ep = Point::new(rect.left - 1, rect.top - 1);
            let sp = Point::new(ep.x + diam, ep.y + diam);
            DiagGeometry {
                outer: (sp, ep),
                inner: (Point::new(sp.x, sp.y - 1), Point::new(ep.x + 1, ep.y)),
                fill: [
                    Point::new(ep.x + 1 + add, ep.y + 1),
                    Point::new(rect.right - 1, rect.top),
                    Point::new(rect.right - 1, rect.bottom - 1 - add),
                    Point::new(sp.x, sp.y - add),
                ],
            }
        }
    }
}

/// Draw a diagonal bevel across the shorter dimension of `rect`.
///
/// The outer diagonal is drawn first, then the inner diagonal one pixel
/// toward the interior; `MIDDLE` then fills the triangular remainder between
/// the diagonal and the orientation's two sides. `ADJUST` shrinks the
/// orientation's sides (plus any explicit side flags) by the consumed
/// thickness. Validity follows the same rule as [`crate::draw_border`].
pub fn draw_diagonal_border<S: Surface + ?Sized>(
    surface: &mut S,
    rect: &mut Rect,
    style: EdgeStyle,
    end: DiagonalEnd,
    flags: BorderFlags,
) -> Result<bool, SurfaceError> {
    trace!(?style, ?end, ?flags, ?rect, "draw_diagonal_border");

    let paintable = edge_is_paintable(style, flags);
    let add = tables::frame_width(style);
    let sides = end.sides() | flags.sides();
    let (inner_color, outer_color) =
        tables::diag_edge_colors(style, flags, sides.contains(BorderFlags::BOTTOM));
    let geometry = derive(end, rect, add);

    let mut s = PositionGuard::new(surface);

    if let Some(id) = outer_color {
        let color = s.theme_color(id);
        s.move_and_line_to(geometry.outer.0, geometry.outer.1, color)?;
    }
    if let Some(id) = inner_color {
        let color = s.theme_color(id);
        s.move_and_line_to(geometry.inner.0, geometry.inner.1, color)?;
    }

    if flags.contains(BorderFlags::MIDDLE) && paintable {
        let fill = s.theme_color(middle_color(flags));
        s.fill_polygon(&geometry.fill, fill)?;
    }

    if flags.contains(BorderFlags::ADJUST) {
        if sides.contains(BorderFlags::LEFT) {
            rect.left += add;
        }
        if sides.contains(BorderFlags::RIGHT) {
            rect.right -= add;
        }
        if sides.contains(BorderFlags::TOP) {
            rect.top += add;
        }
        if sides.contains(BorderFlags::BOTTOM) {
            rect.bottom -= add;
        }
    }

    Ok(paintable)
}
