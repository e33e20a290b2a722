//! Emotion classifier
//!
//! The analysis pipeline only sees the [`EmotionClassifier`] trait. The
//! bundled implementation is a small bag-of-words MLP loaded from a model
//! directory:
//!
//! ```text
//! models/emotion/
//!   config.json          model_type, model_name, max_length
//!   label_mappings.json  {"id_to_label": {"0": "joy", ...}}  (optional)
//!   weights.json         vocab, w1, b1, w2, b2
//! ```
//!
//! Loading is slow compared to inference, so the service keeps one instance
//! per process behind a [`ClassifierSlot`].

pub mod loader;
pub mod model;
pub mod slot;
mod tokenizer;

pub use loader::{check_model_dir, load_model_dir, FileStatus, ModelReport};
pub use model::{MlpEmotionClassifier, MlpWeights};
pub use slot::ClassifierSlot;
pub use tokenizer::Tokenizer;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::models::EmotionPrediction;

/// Default token cap for classifier input
pub const DEFAULT_MAX_LENGTH: usize = 128;

/// Something that maps text to an emotion distribution over a fixed label set
pub trait EmotionClassifier: Send + Sync {
    fn predict(&self, text: &str) -> Result<EmotionPrediction, ClassifierError>;

    fn info(&self) -> &ModelInfo;
}

/// Static description of a loaded model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub model_name: String,
    /// Labels ordered by id
    pub labels: Vec<String>,
    pub device: String,
    /// Total trainable parameters
    pub parameters: usize,
    pub max_length: usize,
}

/// Inference-time failures
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Failures while loading a model directory
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Required model file missing: {0}")]
    MissingFile(PathBuf),

    #[error("Model file is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: PathBuf, message: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Shape mismatch in {what}: expected {expected}, found {found}")]
    ShapeMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    #[error("Invalid label mapping: {0}")]
    InvalidLabels(String),

    #[error("Model loader failed: {0}")]
    LoaderFailed(String),
}
