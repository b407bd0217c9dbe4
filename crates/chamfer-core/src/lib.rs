#![forbid(unsafe_code)]

//! Core vocabulary for the chamfer border engine.
//!
//! # Role in chamfer
//! `chamfer-core` is the shared vocabulary layer: integer pixel geometry and
//! the flag types that select what an edge looks like and which parts of it
//! are drawn. It has no drawing logic of its own.
//!
//! # This crate provides
//! - [`geometry::Point`] and [`geometry::Rect`] on the legacy pixel grid
//!   (top-left origin, exclusive right/bottom).
//! - [`flags::EdgeStyle`] — the 4-bit style code selecting inner/outer bevels.
//! - [`flags::BorderFlags`] — side mask plus appearance/behavior modifiers.
//! - [`flags::DiagonalEnd`] — the four diagonal-bevel orientations.
//!
//! # How it fits in the system
//! `chamfer-draw` consumes these types in its color lookup tables and in the
//! rectangular and diagonal edge renderers. Keeping them here lets surface
//! backends depend on the vocabulary without pulling in the renderers.

pub mod flags;
pub mod geometry;

pub use flags::{BorderFlags, DiagonalEnd, EdgeStyle};
pub use geometry::{Point, Rect};
