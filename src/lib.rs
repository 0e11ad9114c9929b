// src/lib.rs

//! chartstream - beatmap-to-window streaming for sequence models
//!
//! This crate turns rhythm-game beatmap files into fixed-length numeric
//! training windows: hit objects are encoded into fixed-width rows
//! (normalized position, time scalar, 14-way event kind), whole charts
//! become ordered sequences, and a lazy two-level iterator slices those
//! sequences into overlapping windows across a file corpus, with
//! deterministic range partitioning for multi-worker loading.

pub mod chart;
pub mod config;
pub mod dataset;
pub mod encode;
pub mod error;

// Re-export commonly used types for convenience
pub use chart::{Beatmap, BeatmapLoader, Curve, CurveKind, HitObject, LoadOptions, Position};
pub use config::PipelineConfig;
pub use dataset::{
    partition, worker_subrange, Batcher, LabelIndex, ParallelLoadConfig, ParallelWindowLoader,
    TrackRange, Window, WindowBatch, WindowDataset, WindowIterator,
};
pub use encode::{
    beatmap_to_sequence, encode, repeat_class, DataPoint, EncodedSequence, EventKind, FEATURE_DIM,
    NUM_EVENT_KINDS, TIME_EMBED_DIM,
};
pub use error::{PipelineError, Result};
