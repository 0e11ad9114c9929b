// src/config.rs

//! Configuration for the streaming pipeline.
//!
//! Parsed from TOML with environment variable overrides, validated
//! before anything is constructed from it.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{PipelineError, Result};

/// Top-level pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub dataset: DatasetConfig,
    pub window: WindowConfig,
    pub loader: LoaderConfig,
}

// Dataset location and pass behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    // Corpus root containing the TrackNNNNN directories.
    pub root: PathBuf,
    // Path to the beatmap-id -> label JSON index.
    pub label_index: PathBuf,
    // First track index (inclusive).
    pub start: u32,
    // Last track index (exclusive).
    pub end: u32,
    // Shuffle file order each pass.
    pub shuffle: bool,
    // Optional seed for reproducible shuffling.
    pub seed: Option<u64>,
}

// Window slicing parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    // Rows per window.
    pub seq_len: usize,
    // Row offset between successive windows.
    pub stride: usize,
}

// Worker and batching parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    // Windows per batch.
    pub batch_size: usize,
    // Loader workers; 0 iterates on the calling thread.
    pub num_workers: u32,
    // Channel buffer slots per worker.
    pub channel_buffer: usize,
    // Drop the final short batch.
    pub drop_last: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./data"),
            label_index: PathBuf::from("./beatmap_idx.json"),
            start: 0,
            end: 0,
            shuffle: false,
            seed: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            seq_len: 25,
            stride: 1,
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            batch_size: 1,
            num_workers: 0,
            channel_buffer: 4,
            drop_last: false,
        }
    }
}

impl FromStr for PipelineConfig {
    type Err = PipelineError;

    /// Parse configuration from a TOML string.
    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s)
            .map_err(|e| PipelineError::config_with_source("failed to parse TOML config", e))
    }
}

impl PipelineConfig {
    // Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::config_with_source(
                format!("failed to read config file '{}'", path.display()),
                e,
            )
        })?;
        let config: Self = content.parse()?;
        config.validate()?;
        Ok(config)
    }

    // Apply environment variable overrides, prefixed with `CHARTSTREAM_`.
    //
    // - `CHARTSTREAM_DATASET_ROOT` overrides `dataset.root`
    // - `CHARTSTREAM_DATASET_SHUFFLE` overrides `dataset.shuffle`
    // - `CHARTSTREAM_WINDOW_SEQ_LEN` overrides `window.seq_len`
    // - `CHARTSTREAM_LOADER_NUM_WORKERS` overrides `loader.num_workers`
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(val) = std::env::var("CHARTSTREAM_DATASET_ROOT") {
            self.dataset.root = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("CHARTSTREAM_DATASET_LABEL_INDEX") {
            self.dataset.label_index = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("CHARTSTREAM_DATASET_START") {
            if let Ok(v) = val.parse() {
                self.dataset.start = v;
            }
        }
        if let Ok(val) = std::env::var("CHARTSTREAM_DATASET_END") {
            if let Ok(v) = val.parse() {
                self.dataset.end = v;
            }
        }
        if let Ok(val) = std::env::var("CHARTSTREAM_DATASET_SHUFFLE") {
            if let Ok(v) = val.parse() {
                self.dataset.shuffle = v;
            }
        }
        if let Ok(val) = std::env::var("CHARTSTREAM_DATASET_SEED") {
            if let Ok(v) = val.parse() {
                self.dataset.seed = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CHARTSTREAM_WINDOW_SEQ_LEN") {
            if let Ok(v) = val.parse() {
                self.window.seq_len = v;
            }
        }
        if let Ok(val) = std::env::var("CHARTSTREAM_WINDOW_STRIDE") {
            if let Ok(v) = val.parse() {
                self.window.stride = v;
            }
        }
        if let Ok(val) = std::env::var("CHARTSTREAM_LOADER_BATCH_SIZE") {
            if let Ok(v) = val.parse() {
                self.loader.batch_size = v;
            }
        }
        if let Ok(val) = std::env::var("CHARTSTREAM_LOADER_NUM_WORKERS") {
            if let Ok(v) = val.parse() {
                self.loader.num_workers = v;
            }
        }
        if let Ok(val) = std::env::var("CHARTSTREAM_LOADER_DROP_LAST") {
            if let Ok(v) = val.parse() {
                self.loader.drop_last = v;
            }
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.window.seq_len == 0 {
            return Err(PipelineError::config("window.seq_len must be greater than 0"));
        }
        if self.window.stride == 0 {
            return Err(PipelineError::config("window.stride must be greater than 0"));
        }
        if self.dataset.end < self.dataset.start {
            return Err(PipelineError::config(
                "dataset.end must not be less than dataset.start",
            ));
        }
        if self.loader.batch_size == 0 {
            return Err(PipelineError::config(
                "loader.batch_size must be greater than 0",
            ));
        }
        if self.loader.channel_buffer == 0 {
            return Err(PipelineError::config(
                "loader.channel_buffer must be greater than 0",
            ));
        }
        Ok(())
    }
}
