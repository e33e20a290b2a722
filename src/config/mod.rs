//! Configuration module for MindCare
//!
//! Handles the layered service configuration (defaults, user file, project
//! file, environment) and its validation. CLI flags are applied on top by the
//! commands that accept them.

mod app_config;

pub use app_config::{
    AppConfig, ModelConfig, ServerConfig, ENV_HOST, ENV_MODEL_PATH, ENV_PORT, EXAMPLE_CONFIG,
    PROJECT_CONFIG_FILE,
};

use thiserror::Error;

use crate::analysis::ScoringError;

/// Rejected configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("server.port must be non-zero")]
    InvalidPort,

    #[error("server.host must not be empty")]
    EmptyHost,

    #[error("{0} must be greater than zero")]
    ZeroLimit(&'static str),

    #[error("Invalid scoring config: {0}")]
    Scoring(#[from] ScoringError),
}
