//! Deterministic pixel-art sprite generation for the mining game's asset set.
//!
//! Everything is drawn onto an in-memory [`Canvas`] through a handful of
//! primitives (pixels, rects, polygons, strokes) and written out as PNG by
//! [`output::save`]. Generators take no randomness and no clock, so the same
//! release always produces byte-identical assets.

pub mod canvas;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod output;
pub mod sprites;

pub use canvas::Canvas;
pub use error::{Error, Result};
