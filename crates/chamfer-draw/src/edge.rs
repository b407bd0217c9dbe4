#![forbid(unsafe_code)]

//! The rectangular edge renderer.

use chamfer_core::flags::{BorderFlags, EdgeStyle};
use chamfer_core::geometry::{Point, Rect};
use tracing::trace;

use crate::surface::{PositionGuard, Surface, SurfaceError};
use crate::tables;
use crate::theme::SystemColor;

/// Whether a style/modifier combination is fully paintable.
///
/// A generic half style (the whole [`EdgeStyle::INNER`] or
/// [`EdgeStyle::OUTER`] mask) is only meaningful under `FLAT` or `MONO`;
/// everything else paints as-is.
pub(crate) fn edge_is_paintable(style: EdgeStyle, flags: BorderFlags) -> bool {
    let half_style = style.contains(EdgeStyle::INNER) || style.contains(EdgeStyle::OUTER);
    !(half_style && !flags.intersects(BorderFlags::FLAT | BorderFlags::MONO))
}

/// Interior fill color: the monochrome background under `MONO`, the control
/// face otherwise.
pub(crate) fn middle_color(flags: BorderFlags) -> SystemColor {
    if flags.contains(BorderFlags::MONO) {
        SystemColor::Window
    } else {
        SystemColor::Face
    }
}

/// Draw a rectangular 3D border.
///
/// Each side selected in `flags` is drawn as an outer bevel line at the
/// outermost pixel row/column followed by an inner line one pixel further in.
/// Where both sides of a corner are selected, the adjoining inner lines are
/// shortened by one pixel so the miter is not painted twice. `MIDDLE` fills
/// the interior (before the lines, so they paint over the fill edge);
/// `ADJUST` shrinks `rect` by the consumed thickness per selected side.
///
/// Returns `Ok(false)` when the combination is not fully paintable (see the
/// crate docs); partial output such as the interior fill is still produced
/// where the tables allow, matching the legacy engine.
pub fn draw_border<S: Surface + ?Sized>(
    surface: &mut S,
    rect: &mut Rect,
    style: EdgeStyle,
    flags: BorderFlags,
) -> Result<bool, SurfaceError> {
    trace!(?style, ?flags, ?rect, "draw_border");

    let paintable = edge_is_paintable(style, flags);
    let colors = tables::rect_edge_colors(style, flags);
    let mut inner = *rect;

    // One-pixel miter shortening per selected corner.
    let lt_plus = i32::from(flags.contains(BorderFlags::TOP_LEFT));
    let rt_plus = i32::from(flags.contains(BorderFlags::TOP_RIGHT));
    let lb_plus = i32::from(flags.contains(BorderFlags::BOTTOM_LEFT));
    let rb_plus = i32::from(flags.contains(BorderFlags::BOTTOM_RIGHT));

    let mut s = PositionGuard::new(surface);

    if flags.contains(BorderFlags::MIDDLE) && paintable {
        let fill = s.theme_color(middle_color(flags));
        s.fill_rect(inner, fill)?;
    }

    // Outer edge.
    if let Some(id) = colors.lt_outer {
        let color = s.theme_color(id);
        if flags.contains(BorderFlags::TOP) {
            s.move_and_line_to(
                Point::new(inner.left, inner.top),
                Point::new(inner.right, inner.top),
                color,
            )?;
        }
        if flags.contains(BorderFlags::LEFT) {
            s.move_and_line_to(
                Point::new(inner.left, inner.top),
                Point::new(inner.left, inner.bottom),
                color,
            )?;
        }
    }
    if let Some(id) = colors.rb_outer {
        let color = s.theme_color(id);
        if flags.contains(BorderFlags::BOTTOM) {
            s.move_and_line_to(
                Point::new(inner.left, inner.bottom - 1),
                Point::new(inner.right, inner.bottom - 1),
                color,
            )?;
        }
        if flags.contains(BorderFlags::RIGHT) {
            s.move_and_line_to(
                Point::new(inner.right - 1, inner.top),
                Point::new(inner.right - 1, inner.bottom),
                color,
            )?;
        }
    }

    // Inner edge, one pixel in, shortened at the selected corners.
    if let Some(id) = colors.lt_inner {
        let color = s.theme_color(id);
        if flags.contains(BorderFlags::TOP) {
            s.move_and_line_to(
                Point::new(inner.left + lt_plus, inner.top + 1),
                Point::new(inner.right - rt_plus, inner.top + 1),
                color,
            )?;
        }
        if flags.contains(BorderFlags::LEFT) {
            s.move_and_line_to(
                Point::new(inner.left + 1, inner.top + lt_plus),
                Point::new(inner.left + 1, inner.bottom - lb_plus),
                color,
            )?;
        }
    }
    if let Some(id) = colors.rb_inner {
        let color = s.theme_color(id);
        if flags.contains(BorderFlags::BOTTOM) {
            s.move_and_line_to(
                Point::new(inner.left + lb_plus, inner.bottom - 2),
                Point::new(inner.right - rb_plus, inner.bottom - 2),
                color,
            )?;
        }
        if flags.contains(BorderFlags::RIGHT) {
            s.move_and_line_to(
                Point::new(inner.right - 2, inner.top + rt_plus),
                Point::new(inner.right - 2, inner.bottom - rb_plus),
                color,
            )?;
        }
    }

    if (flags.contains(BorderFlags::MIDDLE) && paintable) || flags.contains(BorderFlags::ADJUST) {
        let add = tables::frame_width(style);
        if flags.contains(BorderFlags::LEFT) {
            inner.left += add;
        }
        if flags.contains(BorderFlags::RIGHT) {
            inner.right -= add;
        }
        if flags.contains(BorderFlags::TOP) {
            inner.top += add;
        }
        if flags.contains(BorderFlags::BOTTOM) {
            inner.bottom -= add;
        }
        if flags.contains(BorderFlags::ADJUST) {
            *rect = inner;
        }
    }

    Ok(paintable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{DrawOp, RecordingSurface};
    use crate::raster::RasterSurface;
    use crate::theme::{Rgb, Theme};

    fn full_styles() -> [EdgeStyle; 4] {
        [
            EdgeStyle::RAISED,
            EdgeStyle::SUNKEN,
            EdgeStyle::ETCHED,
            EdgeStyle::BUMP,
        ]
    }

    fn lines(surface: &RecordingSurface) -> Vec<(Point, Point, Rgb)> {
        surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, color } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn full_styles_emit_eight_segments_on_all_sides() {
        for style in full_styles() {
            let mut surface = RecordingSurface::new();
            let mut rect = Rect::new(0, 0, 10, 10);
            let paintable =
                draw_border(&mut surface, &mut rect, style, BorderFlags::RECT).unwrap();
            assert!(paintable, "{style:?} should be paintable");
            assert_eq!(lines(&surface).len(), 8, "{style:?}");
            assert_eq!(rect, Rect::new(0, 0, 10, 10), "no adjust requested");
        }
    }

    #[test]
    fn half_styles_report_not_paintable_without_flat_or_mono() {
        for style in [EdgeStyle::OUTER, EdgeStyle::INNER] {
            let mut surface = RecordingSurface::new();
            let mut rect = Rect::new(0, 0, 8, 8);
            assert!(!draw_border(&mut surface, &mut rect, style, BorderFlags::RECT).unwrap());
            // Nothing to draw either: the normal tables are all sentinels.
            assert!(lines(&surface).is_empty());

            let paintable =
                draw_border(&mut surface, &mut rect, style, BorderFlags::RECT | BorderFlags::MONO)
                    .unwrap();
            assert!(paintable, "{style:?} is valid under MONO");
        }
    }

    #[test]
    fn adjust_shrinks_by_two_per_side_for_full_bevels() {
        let mut surface = RecordingSurface::new();
        let mut rect = Rect::new(0, 0, 10, 10);
        let paintable = draw_border(
            &mut surface,
            &mut rect,
            EdgeStyle::RAISED,
            BorderFlags::RECT | BorderFlags::ADJUST,
        )
        .unwrap();
        assert!(paintable);
        assert_eq!(rect, Rect::new(2, 2, 8, 8));
    }

    #[test]
    fn adjust_shrink_is_independent_of_prior_shrinks() {
        let flags = BorderFlags::RECT | BorderFlags::ADJUST;
        let mut surface = RecordingSurface::new();
        let mut rect = Rect::new(0, 0, 20, 20);
        draw_border(&mut surface, &mut rect, EdgeStyle::SUNKEN, flags).unwrap();
        assert_eq!(rect, Rect::new(2, 2, 18, 18));
        draw_border(&mut surface, &mut rect, EdgeStyle::SUNKEN, flags).unwrap();
        assert_eq!(rect, Rect::new(4, 4, 16, 16));
    }

    #[test]
    fn adjust_only_touches_selected_sides() {
        let mut surface = RecordingSurface::new();
        let mut rect = Rect::new(0, 0, 10, 10);
        draw_border(
            &mut surface,
            &mut rect,
            EdgeStyle::RAISED,
            BorderFlags::LEFT | BorderFlags::TOP | BorderFlags::ADJUST,
        )
        .unwrap();
        assert_eq!(rect, Rect::new(2, 2, 10, 10));
    }

    #[test]
    fn corner_flags_shorten_the_adjoining_inner_lines() {
        // Top-left corner selected: both inner lines start one pixel in.
        let mut surface = RecordingSurface::new();
        let mut rect = Rect::new(0, 0, 10, 10);
        draw_border(
            &mut surface,
            &mut rect,
            EdgeStyle::RAISED,
            BorderFlags::TOP_LEFT,
        )
        .unwrap();
        let segs = lines(&surface);
        // Outer top, outer left, inner top, inner left.
        assert_eq!(segs.len(), 4);
        let inner_top = segs[2];
        let inner_left = segs[3];
        assert_eq!(inner_top.0, Point::new(1, 1));
        assert_eq!(inner_top.1, Point::new(10, 1));
        assert_eq!(inner_left.0, Point::new(1, 1));
        assert_eq!(inner_left.1, Point::new(1, 10));

        // Top side alone: the inner top line starts at the rectangle edge.
        let mut surface = RecordingSurface::new();
        draw_border(&mut surface, &mut rect, EdgeStyle::RAISED, BorderFlags::TOP).unwrap();
        let segs = lines(&surface);
        assert_eq!(segs[1].0, Point::new(0, 1));
        assert_eq!(segs[1].1, Point::new(10, 1));
    }

    #[test]
    fn middle_fill_happens_before_the_lines() {
        let mut surface = RecordingSurface::new();
        let mut rect = Rect::new(0, 0, 10, 10);
        draw_border(
            &mut surface,
            &mut rect,
            EdgeStyle::RAISED,
            BorderFlags::RECT | BorderFlags::MIDDLE,
        )
        .unwrap();
        let ops = surface.ops();
        assert!(matches!(
            ops[0],
            DrawOp::FillRect {
                rect: Rect {
                    left: 0,
                    top: 0,
                    right: 10,
                    bottom: 10
                },
                ..
            }
        ));
        assert_eq!(ops.len(), 9);
    }

    #[test]
    fn mono_middle_fills_with_the_window_color() {
        let theme = Theme::default();
        let mut surface = RecordingSurface::new();
        let mut rect = Rect::new(0, 0, 6, 6);
        draw_border(
            &mut surface,
            &mut rect,
            EdgeStyle::RAISED,
            BorderFlags::RECT | BorderFlags::MIDDLE | BorderFlags::MONO,
        )
        .unwrap();
        match &surface.ops()[0] {
            DrawOp::FillRect { color, .. } => assert_eq!(*color, theme.window),
            other => panic!("expected fill, got {other:?}"),
        }
    }

    #[test]
    fn not_paintable_combination_skips_the_middle_fill() {
        let mut surface = RecordingSurface::new();
        let mut rect = Rect::new(0, 0, 6, 6);
        let paintable = draw_border(
            &mut surface,
            &mut rect,
            EdgeStyle::OUTER,
            BorderFlags::RECT | BorderFlags::MIDDLE,
        )
        .unwrap();
        assert!(!paintable);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn empty_side_mask_draws_nothing_and_reports_paintable() {
        let mut surface = RecordingSurface::new();
        let mut rect = Rect::new(0, 0, 6, 6);
        let paintable =
            draw_border(&mut surface, &mut rect, EdgeStyle::RAISED, BorderFlags::empty())
                .unwrap();
        assert!(paintable);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn position_is_restored_after_drawing() {
        let mut surface = RecordingSurface::new();
        surface.set_position(Point::new(42, 17));
        let mut rect = Rect::new(0, 0, 10, 10);
        draw_border(&mut surface, &mut rect, EdgeStyle::RAISED, BorderFlags::RECT).unwrap();
        assert_eq!(surface.position(), Point::new(42, 17));
    }

    #[test]
    fn position_is_restored_when_the_backend_fails() {
        let mut surface = RecordingSurface::failing_after(2);
        surface.set_position(Point::new(5, 5));
        let mut rect = Rect::new(0, 0, 10, 10);
        let err = draw_border(&mut surface, &mut rect, EdgeStyle::RAISED, BorderFlags::RECT);
        assert!(err.is_err());
        assert_eq!(surface.position(), Point::new(5, 5));
    }

    #[test]
    fn middle_fill_never_leaks_outside_the_adjusted_interior() {
        // Distinct colors so the face fill is unambiguous in the raster.
        let theme = Theme::builder()
            .face(Rgb::new(10, 10, 10))
            .highlight(Rgb::new(1, 1, 1))
            .light(Rgb::new(2, 2, 2))
            .shadow(Rgb::new(3, 3, 3))
            .dark_shadow(Rgb::new(4, 4, 4))
            .build();
        let mut surface = RasterSurface::with_theme(12, 12, theme.clone());
        let mut rect = Rect::new(1, 1, 11, 11);
        draw_border(
            &mut surface,
            &mut rect,
            EdgeStyle::RAISED,
            BorderFlags::RECT | BorderFlags::MIDDLE | BorderFlags::ADJUST,
        )
        .unwrap();
        assert_eq!(rect, Rect::new(3, 3, 9, 9));
        for y in 0..12 {
            for x in 0..12 {
                let inside = rect.contains(Point::new(x, y));
                let pixel = surface.pixel(x, y).unwrap();
                if inside {
                    assert_eq!(pixel, theme.face, "interior at ({x},{y})");
                } else {
                    assert_ne!(pixel, theme.face, "fill leaked to ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn raised_border_pixels_match_the_legacy_layout() {
        let theme = Theme::default();
        let mut surface = RasterSurface::new(8, 8);
        let mut rect = Rect::new(0, 0, 8, 8);
        draw_border(&mut surface, &mut rect, EdgeStyle::RAISED, BorderFlags::RECT).unwrap();

        // Outer: light on top/left, dark shadow on bottom/right.
        assert_eq!(surface.pixel(0, 0).unwrap(), theme.light);
        assert_eq!(surface.pixel(4, 0).unwrap(), theme.light);
        assert_eq!(surface.pixel(0, 4).unwrap(), theme.light);
        assert_eq!(surface.pixel(7, 4).unwrap(), theme.dark_shadow);
        assert_eq!(surface.pixel(4, 7).unwrap(), theme.dark_shadow);
        // Inner: highlight on top/left, shadow on bottom/right.
        assert_eq!(surface.pixel(4, 1).unwrap(), theme.highlight);
        assert_eq!(surface.pixel(1, 4).unwrap(), theme.highlight);
        assert_eq!(surface.pixel(4, 6).unwrap(), theme.shadow);
        assert_eq!(surface.pixel(6, 4).unwrap(), theme.shadow);
    }
}
