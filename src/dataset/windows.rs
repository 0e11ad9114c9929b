// src/dataset/windows.rs

use std::path::PathBuf;
use std::sync::Arc;

use crate::chart::{BeatmapLoader, LoadOptions};
use crate::encode::{beatmap_to_sequence, EncodedSequence, FEATURE_DIM};
use crate::error::Result;

use super::labels::LabelIndex;

/// One fixed-length training window.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    /// Normalized positions, `seq_len` rows of `[x, y]`.
    pub x: Vec<[f32; 2]>,
    /// Embedded time plus one-hot kind, `seq_len` rows.
    pub y: Vec<[f32; FEATURE_DIM]>,
    /// Dense label of the source chart, constant across the window.
    pub label: u32,
}

/// The chart currently being sliced.
struct LoadedChart {
    sequence: EncodedSequence,
    label: u32,
}

/// A forward-only cursor over the windows of a list of chart files.
///
/// Charts are loaded lazily one at a time; each loaded chart is sliced
/// into windows of `seq_len` rows advancing by `stride` until fewer
/// than `seq_len` rows remain, then the next file is loaded. A chart
/// shorter than `seq_len` contributes no windows and no remainder is
/// carried across chart boundaries. There is no seeking backward.
pub struct WindowIterator {
    loader: Arc<dyn BeatmapLoader>,
    labels: Arc<LabelIndex>,
    files: Vec<PathBuf>,
    seq_len: usize,
    stride: usize,
    file_index: usize,
    current: Option<LoadedChart>,
    offset: usize,
}

impl WindowIterator {
    pub fn new(
        loader: Arc<dyn BeatmapLoader>,
        labels: Arc<LabelIndex>,
        files: Vec<PathBuf>,
        seq_len: usize,
        stride: usize,
    ) -> Self {
        Self {
            loader,
            labels,
            files,
            seq_len,
            stride,
            file_index: 0,
            current: None,
            offset: 0,
        }
    }

    /// The next window, or `Ok(None)` once every file is exhausted.
    ///
    /// A chart that fails to load or whose id is missing from the label
    /// index ends the stream with an error.
    pub fn next_window(&mut self) -> Result<Option<Window>> {
        while self.needs_advance() {
            if self.file_index >= self.files.len() {
                return Ok(None);
            }
            self.load_next_file()?;
        }

        // needs_advance guarantees a loaded chart with enough rows left
        let Some(chart) = self.current.as_ref() else {
            return Ok(None);
        };
        let window = Window {
            x: chart.sequence.x[self.offset..self.offset + self.seq_len].to_vec(),
            y: chart.sequence.y[self.offset..self.offset + self.seq_len].to_vec(),
            label: chart.label,
        };
        self.offset += self.stride;

        Ok(Some(window))
    }

    /// True while no chart is loaded or the current one has fewer than
    /// `seq_len` rows remaining at the cursor.
    fn needs_advance(&self) -> bool {
        match &self.current {
            None => true,
            Some(chart) => self.offset + self.seq_len > chart.sequence.len(),
        }
    }

    fn load_next_file(&mut self) -> Result<()> {
        let path = &self.files[self.file_index];
        tracing::debug!(path = %path.display(), "loading chart");

        // Stacking is a display adjustment; encoding always disables it.
        let beatmap = self.loader.load(path, LoadOptions { stacking: false })?;
        let label = self.labels.get(beatmap.beatmap_id)?;

        let sequence = beatmap_to_sequence(&beatmap);
        self.current = Some(LoadedChart {
            sequence: EncodedSequence::from_datapoints(&sequence),
            label,
        });
        self.offset = 0;
        self.file_index += 1;
        Ok(())
    }
}

impl Iterator for WindowIterator {
    type Item = Result<Window>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_window() {
            Ok(Some(window)) => Some(Ok(window)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
