// src/dataset/mod.rs

//! Dataset streaming: label lookup, windowing, sharding, batching.
//!
//! The dataset walks a corpus laid out as `<root>/TrackNNNNN/beatmaps/*`,
//! loads each chart through the [`BeatmapLoader`](crate::chart::BeatmapLoader)
//! seam, encodes it, and yields fixed-length overlapping windows. For
//! multi-worker runs the track range is partitioned into disjoint
//! per-worker sub-ranges up front; after that each worker's iterator is
//! fully private.
//!
//! # Example
//!
//! ```ignore
//! use chartstream::dataset::{LabelIndex, TrackRange, WindowDataset};
//! use std::sync::Arc;
//!
//! let labels = Arc::new(LabelIndex::from_file("beatmap_idx.json")?);
//! let dataset = WindowDataset::new(loader, labels, "/data/ORS10548",
//!     TrackRange::new(0, 10548), 25, 16);
//!
//! for window in dataset.iter()? {
//!     let window = window?;
//!     // window.x: seq_len x 2, window.y: seq_len x 142
//! }
//! ```

mod batch;
mod corpus;
mod labels;
mod parallel;
mod sharding;
mod windows;

pub use batch::{Batcher, WindowBatch};
pub use corpus::{track_files, WindowDataset};
pub use labels::LabelIndex;
pub use parallel::{ParallelLoadConfig, ParallelWindowLoader, WindowFromWorker};
pub use sharding::{partition, worker_subrange, TrackRange};
pub use windows::{Window, WindowIterator};
