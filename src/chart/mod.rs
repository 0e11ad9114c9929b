// src/chart/mod.rs

//! Beatmap object model and the loader seam.
//!
//! This module defines the structured form of a chart file: timed hit
//! objects with positions and, for sliders, curve geometry. Parsing a
//! chart file into this model is the job of an external parser behind
//! the [`BeatmapLoader`] trait; everything downstream (encoding,
//! windowing) only ever sees these types.

mod loader;
mod object;

pub use loader::{BeatmapLoader, LoadOptions};
pub use object::{Beatmap, Curve, CurveKind, HitObject, Position};
