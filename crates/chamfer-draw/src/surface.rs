#![forbid(unsafe_code)]

//! The drawing-surface contract and its scoped-state guard.

use std::ops::{Deref, DerefMut};

use chamfer_core::geometry::{Point, Rect};

use crate::theme::{Rgb, SystemColor};

/// Backend failure while drawing.
///
/// Invalid style/modifier combinations are not errors; they are the `false`
/// return of the renderers. A `SurfaceError` aborts the remaining drawing of
/// the current call, after which the surface state is still restored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// A pen, brush, or equivalent backend resource could not be acquired.
    #[error("drawing resource unavailable: {0}")]
    Resource(&'static str),
    /// The backend rejected a draw call.
    #[error("draw call rejected: {0}")]
    Rejected(&'static str),
}

/// A drawing target for the edge renderers.
///
/// Coordinates follow the legacy pixel grid: top-left origin, exclusive
/// right/bottom. Line semantics match the legacy engine: a segment covers the
/// pixels from `from` up to but excluding `to`, and leaves the surface's
/// current drawing position at `to`. A zero-length segment draws nothing.
pub trait Surface {
    /// Draw a one-pixel-wide line segment, endpoint exclusive.
    fn move_and_line_to(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), SurfaceError>;

    /// Fill a polygon given its vertices.
    ///
    /// The renderers pass four points; a degenerate quad with a duplicated
    /// last point is a triangle.
    fn fill_polygon(&mut self, points: &[Point], color: Rgb) -> Result<(), SurfaceError>;

    /// Fill a rectangle, right/bottom exclusive.
    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<(), SurfaceError>;

    /// Resolve an abstract theme color to a concrete color.
    fn theme_color(&self, id: SystemColor) -> Rgb;

    /// Current drawing position.
    fn position(&self) -> Point;

    /// Move the drawing position without drawing.
    fn set_position(&mut self, pos: Point);
}

/// Restores a surface's drawing position when dropped.
///
/// The renderers wrap their surface in this guard so the position is restored
/// on every exit path: success, the early not-paintable return, and `?`
/// propagation of a [`SurfaceError`].
pub struct PositionGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    saved: Point,
}

impl<'a, S: Surface + ?Sized> PositionGuard<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        let saved = surface.position();
        Self { surface, saved }
    }
}

impl<S: Surface + ?Sized> Deref for PositionGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for PositionGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for PositionGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_position(self.saved);
    }
}
