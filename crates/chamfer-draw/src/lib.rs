#![forbid(unsafe_code)]

//! Table-driven 3D border and diagonal bevel rendering.
//!
//! # Role in chamfer
//! `chamfer-draw` is the rendering engine. Given a rectangle, an edge style,
//! and side/shape/fill modifiers it draws the exact sequence of one-pixel
//! lines (or a diagonal bevel) the legacy desktop engine produced, in
//! system-theme colors, optionally filling the interior and shrinking the
//! caller's rectangle to the remaining client area.
//!
//! # Primary responsibilities
//! - **Color tables**: the fixed 16-entry palette-index tables ([`tables`]).
//! - **Rectangular edges**: [`draw_border`] draws up to four sides, each as
//!   an outer line plus an inner line one pixel in.
//! - **Diagonal edges**: [`draw_diagonal_border`] draws a bevel across the
//!   shorter dimension for corner affordances.
//! - **Surface contract**: [`Surface`] is the only backend dependency; the
//!   crate bundles an in-memory raster target and a call-recording target.
//!
//! # How it fits in the system
//! Widget code calls the two `draw_*` entry points with a [`Surface`] for its
//! output device. The engine never allocates drawing resources beyond the
//! call; the surface's drawing position is restored on every exit path.

pub mod diagonal;
pub mod edge;
pub mod headless;
pub mod raster;
pub mod surface;
pub mod tables;
pub mod theme;

pub use diagonal::draw_diagonal_border;
pub use edge::draw_border;
pub use headless::{DrawOp, RecordingSurface};
pub use raster::RasterSurface;
pub use surface::{PositionGuard, Surface, SurfaceError};
pub use theme::{Rgb, SystemColor, Theme, ThemeBuilder};
