// src/dataset/labels.rs

use std::collections::HashMap;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// Read-only map from beatmap id to the dense integer label used for
/// model conditioning.
///
/// Loaded once at dataset construction from a JSON object of
/// `beatmap_id -> label`; every chart the dataset touches must be
/// present, an unknown id is a fatal lookup failure.
#[derive(Debug, Clone)]
pub struct LabelIndex {
    labels: HashMap<u64, u32>,
}

impl LabelIndex {
    /// Load the index from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::label_index_with_source(path, "failed to read label index", e)
        })?;
        let labels: HashMap<u64, u32> = serde_json::from_str(&content).map_err(|e| {
            PipelineError::label_index_with_source(path, "failed to parse label index", e)
        })?;
        Ok(Self { labels })
    }

    pub fn from_map(labels: HashMap<u64, u32>) -> Self {
        Self { labels }
    }

    /// Label for a beatmap id; unknown ids are fatal.
    pub fn get(&self, beatmap_id: u64) -> Result<u32> {
        self.labels
            .get(&beatmap_id)
            .copied()
            .ok_or(PipelineError::UnknownLabel { beatmap_id })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
