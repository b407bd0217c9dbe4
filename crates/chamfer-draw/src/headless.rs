#![forbid(unsafe_code)]

//! A headless surface that records draw calls instead of rasterizing them.
//!
//! Used throughout the test suite to assert on the exact sequence of
//! primitives a renderer emits, and by callers that want to replay edges onto
//! a backend of their own. Supports fault injection so the error paths of the
//! renderers stay covered.

use chamfer_core::geometry::{Point, Rect};

use crate::surface::{Surface, SurfaceError};
use crate::theme::{Rgb, SystemColor, Theme};

/// One recorded drawing primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    /// An endpoint-exclusive line segment.
    Line { from: Point, to: Point, color: Rgb },
    /// A filled polygon.
    FillPolygon { points: Vec<Point>, color: Rgb },
    /// A filled rectangle, right/bottom exclusive.
    FillRect { rect: Rect, color: Rgb },
}

/// A [`Surface`] that appends every draw call to an op log.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    theme: Theme,
    ops: Vec<DrawOp>,
    position: Point,
    fail_in: Option<usize>,
}

impl RecordingSurface {
    /// A recorder with the default theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    /// A recorder resolving colors through `theme`.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ops: Vec::new(),
            position: Point::new(0, 0),
            fail_in: None,
        }
    }

    /// A recorder whose draw calls succeed `n` times and then fail.
    ///
    /// The failing call returns [`SurfaceError::Resource`] and records
    /// nothing; later calls succeed again.
    pub fn failing_after(n: usize) -> Self {
        let mut surface = Self::new();
        surface.fail_in = Some(n);
        surface
    }

    /// The recorded ops, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop the recorded ops, keeping theme and position.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    fn check_fault(&mut self) -> Result<(), SurfaceError> {
        match self.fail_in {
            Some(0) => {
                self.fail_in = None;
                Err(SurfaceError::Resource("injected failure"))
            }
            Some(ref mut n) => {
                *n -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn move_and_line_to(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), SurfaceError> {
        self.check_fault()?;
        self.ops.push(DrawOp::Line { from, to, color });
        self.position = to;
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) -> Result<(), SurfaceError> {
        self.check_fault()?;
        self.ops.push(DrawOp::FillPolygon {
            points: points.to_vec(),
            color,
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<(), SurfaceError> {
        self.check_fault()?;
        self.ops.push(DrawOp::FillRect { rect, color });
        Ok(())
    }

    fn theme_color(&self, id: SystemColor) -> Rgb {
        self.theme.color(id)
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, pos: Point) {
        self.position = pos;
    }
}
