#![forbid(unsafe_code)]

//! An in-memory pixel-buffer surface.
//!
//! This backend exists for golden-pixel tests and for callers that want a
//! plain bitmap of the rendered edge. It reproduces the legacy line
//! semantics (one pixel wide, endpoint exclusive) and fills polygons with an
//! even-odd scanline over pixel centers. Out-of-bounds pixels are clipped,
//! never an error.

use chamfer_core::geometry::{Point, Rect};

use crate::surface::{Surface, SurfaceError};
use crate::theme::{Rgb, SystemColor, Theme};

/// A [`Surface`] rasterizing into a `width * height` pixel buffer.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    width: i32,
    height: i32,
    pixels: Vec<Rgb>,
    theme: Theme,
    position: Point,
}

impl RasterSurface {
    /// A buffer cleared to the default theme's window color.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_theme(width, height, Theme::default())
    }

    /// A buffer cleared to `theme`'s window color.
    pub fn with_theme(width: u16, height: u16, theme: Theme) -> Self {
        let pixels = vec![theme.window; usize::from(width) * usize::from(height)];
        Self {
            width: i32::from(width),
            height: i32::from(height),
            pixels,
            theme,
            position: Point::new(0, 0),
        }
    }

    pub fn width(&self) -> u16 {
        self.width as u16
    }

    pub fn height(&self) -> u16 {
        self.height as u16
    }

    /// The pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// The raw pixel buffer in row-major order.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        if x >= 0 && y >= 0 && x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    /// Fill one scanline of a polygon.
    ///
    /// `yc` is the scanline's pixel-center y. A pixel is inside when its
    /// center crosses an odd number of edges to its left.
    fn fill_span_row(&mut self, points: &[Point], yc: f64, y: i32, color: Rgb) {
        let mut crossings: Vec<f64> = Vec::new();
        for i in 0..points.len() {
            let p = points[i];
            let q = points[(i + 1) % points.len()];
            if p.y == q.y {
                continue;
            }
            let (py, qy) = (f64::from(p.y), f64::from(q.y));
            if (py <= yc) == (qy <= yc) {
                continue;
            }
            let t = (yc - py) / (qy - py);
            crossings.push(f64::from(p.x) + t * f64::from(q.x - p.x));
        }
        crossings.sort_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            // Pixel centers in [x0, x1).
            let first = (pair[0] - 0.5).ceil() as i32;
            let last = (pair[1] - 0.5).ceil() as i32 - 1;
            for x in first..=last {
                self.plot(x, y, color);
            }
        }
    }
}

impl Surface for RasterSurface {
    fn move_and_line_to(&mut self, from: Point, to: Point, color: Rgb) -> Result<(), SurfaceError> {
        // Bresenham, plotting every pixel except the endpoint.
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (from.x, from.y);
        while x != to.x || y != to.y {
            self.plot(x, y, color);
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        self.position = to;
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb) -> Result<(), SurfaceError> {
        if points.len() < 3 {
            return Ok(());
        }
        let y_min = points.iter().map(|p| p.y).min().unwrap_or(0).max(0);
        let y_max = points
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(0)
            .min(self.height);
        for y in y_min..y_max {
            self.fill_span_row(points, f64::from(y) + 0.5, y, color);
        }
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<(), SurfaceError> {
        let left = rect.left.max(0);
        let top = rect.top.max(0);
        let right = rect.right.min(self.width);
        let bottom = rect.bottom.min(self.height);
        for y in top..bottom {
            for x in left..right {
                self.pixels[(y * self.width + x) as usize] = color;
            }
        }
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
