// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {

    #[error("Chart error at '{path}': {message}")]
    Chart {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Beatmap id {beatmap_id} missing from label index")]
    UnknownLabel {
        beatmap_id: u64,
    },

    #[error("Dataset error: {message}")]
    Dataset {
        message: String,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Label index error at '{path}': {message}")]
    LabelIndex {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;

// Convenience constructors
impl PipelineError {

    pub fn chart(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Chart {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn chart_with_source(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Chart {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn unknown_label(beatmap_id: u64) -> Self {
        Self::UnknownLabel { beatmap_id }
    }

    pub fn dataset(message: impl Into<String>) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn label_index(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::LabelIndex {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn label_index_with_source(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::LabelIndex {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
