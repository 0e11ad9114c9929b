// src/chart/loader.rs

use std::path::Path;

use crate::error::Result;

use super::object::Beatmap;

/// Options controlling how a chart file is turned into hit objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Apply visual object stacking to positions. The encoding pipeline
    /// always loads with stacking disabled since stacking is a display
    /// adjustment with no timing or gameplay meaning.
    pub stacking: bool,
}

/// Loads chart files into the [`Beatmap`] object model.
///
/// Parsing the chart file format is outside this crate; implementations
/// wrap whatever parser is in use. A failed load is fatal to the stream
/// that requested it.
pub trait BeatmapLoader: Send + Sync {
    fn load(&self, path: &Path, options: LoadOptions) -> Result<Beatmap>;
}
