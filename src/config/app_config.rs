//! Layered service configuration
//!
//! Sources, lowest priority first:
//! 1. Built-in defaults
//! 2. User config (`~/.config/mindcare/config.toml`)
//! 3. Project config (`mindcare.toml` in the working directory, or `--config`)
//! 4. Environment (`MINDCARE_HOST`, `MINDCARE_PORT`, `MINDCARE_MODEL_PATH`)
//! 5. CLI flags (applied by the caller)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::ConfigError;
use crate::analysis::ScoringConfig;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "mindcare.toml";

pub const ENV_HOST: &str = "MINDCARE_HOST";
pub const ENV_PORT: &str = "MINDCARE_PORT";
pub const ENV_MODEL_PATH: &str = "MINDCARE_MODEL_PATH";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Per-text character cap
    pub max_text_length: usize,
    /// Texts per batch request
    pub max_batch_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_text_length: 5000,
            max_batch_size: 50,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model directory
    pub path: PathBuf,
    /// Load the model at startup instead of on first request
    pub preload: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("models/emotion"),
            preload: true,
        }
    }
}

/// Effective configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub scoring: ScoringConfig,
}

/// One config file; every field optional so layers merge
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    server: ServerSection,
    #[serde(default)]
    model: ModelSection,
    scoring: Option<ScoringConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerSection {
    host: Option<String>,
    port: Option<u16>,
    max_text_length: Option<usize>,
    max_batch_size: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelSection {
    path: Option<PathBuf>,
    preload: Option<bool>,
}

impl AppConfig {
    /// Load from files and environment. `explicit` replaces the project file
    /// lookup and must parse; discovered files that fail are skipped.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_path) = Self::user_config_path().filter(|p| p.exists()) {
            config.merge_file_lenient(&user_path);
        }

        match explicit {
            Some(path) => {
                let file = read_config_file(path)
                    .with_context(|| format!("Failed to load config file {}", path.display()))?;
                config.merge(file);
            }
            None => {
                let project_path = PathBuf::from(PROJECT_CONFIG_FILE);
                if project_path.exists() {
                    config.merge_file_lenient(&project_path);
                }
            }
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// `<config_dir>/mindcare/config.toml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mindcare").join("config.toml"))
    }

    fn merge_file_lenient(&mut self, path: &Path) {
        match read_config_file(path) {
            Ok(file) => {
                debug!("Loaded config from {}", path.display());
                self.merge(file);
            }
            Err(e) => warn!("Failed to load {}: {:#}", path.display(), e),
        }
    }

    /// Overlay a file layer (file values win)
    fn merge(&mut self, file: ConfigFile) {
        if let Some(host) = file.server.host {
            self.server.host = host;
        }
        if let Some(port) = file.server.port {
            self.server.port = port;
        }
        if let Some(max) = file.server.max_text_length {
            self.server.max_text_length = max;
        }
        if let Some(max) = file.server.max_batch_size {
            self.server.max_batch_size = max;
        }
        if let Some(path) = file.model.path {
            self.model.path = path;
        }
        if let Some(preload) = file.model.preload {
            self.model.preload = preload;
        }
        if let Some(scoring) = file.scoring {
            self.scoring = scoring;
        }
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup(ENV_HOST).filter(|h| !h.trim().is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("{ENV_PORT} is not a valid port: {port:?}"))?;
        }
        if let Some(path) = lookup(ENV_MODEL_PATH).filter(|p| !p.trim().is_empty()) {
            self.model.path = PathBuf::from(path);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.server.max_text_length == 0 {
            return Err(ConfigError::ZeroLimit("server.max_text_length"));
        }
        if self.server.max_batch_size == 0 {
            return Err(ConfigError::ZeroLimit("server.max_batch_size"));
        }
        self.scoring.validate()?;
        Ok(())
    }

    /// Effective config rendered as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Write the example config to `path`, refusing to overwrite unless `force`
    pub fn write_example(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)?;
    let file: ConfigFile = toml::from_str(&content)?;
    Ok(file)
}

pub const EXAMPLE_CONFIG: &str = r#"# MindCare configuration

[server]
# host = "0.0.0.0"
# port = 8000
# max_text_length = 5000   # characters per text
# max_batch_size = 50      # texts per batch request

[model]
# path = "models/emotion"
# preload = true           # load at startup instead of on first request

# [scoring]
# sentiment = "vader"      # or "lexicon" for the built-in compact scorer

# [scoring.wellness]
# default_base = 5.0
# sentiment_weight = 2.0
# negative_word_weight = 0.5
# max_negative_penalty = 2.0
# base_scores = { joy = 8.0, neutral = 5.0, sadness = 3.0, anxiety = 3.5, anger = 2.5 }

# [scoring.interpretation]
# positive = 7.5
# balanced = 5.0
# concern = 3.0
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SentimentBackend;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.server.max_text_length, 5000);
        assert_eq!(config.server.max_batch_size, 50);
        assert_eq!(config.model.path, PathBuf::from("models/emotion"));
        assert!(config.model.preload);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_layer_overrides_only_given_fields() {
        let mut config = AppConfig::default();
        let file: ConfigFile = toml::from_str(
            r#"
[server]
port = 9000

[model]
preload = false
"#,
        )
        .unwrap();
        config.merge(file);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.model.preload);
        assert_eq!(config.model.path, PathBuf::from("models/emotion"));
    }

    #[test]
    fn test_scoring_section() {
        let file: ConfigFile = toml::from_str(
            r#"
[scoring.wellness]
sentiment_weight = 1.5

[scoring.interpretation]
positive = 8.0
"#,
        )
        .unwrap();
        let mut config = AppConfig::default();
        config.merge(file);
        assert_eq!(config.scoring.wellness.sentiment_weight, 1.5);
        assert_eq!(config.scoring.wellness.base_for("joy"), 8.0);
        assert_eq!(config.scoring.interpretation.positive, 8.0);
        assert_eq!(config.scoring.interpretation.balanced, 5.0);
    }

    #[test]
    fn test_sentiment_backend() {
        assert_eq!(AppConfig::default().scoring.sentiment, SentimentBackend::Vader);

        let file: ConfigFile = toml::from_str("[scoring]\nsentiment = \"lexicon\"").unwrap();
        let mut config = AppConfig::default();
        config.merge(file);
        assert_eq!(config.scoring.sentiment, SentimentBackend::Lexicon);

        assert!(toml::from_str::<ConfigFile>("[scoring]\nsentiment = \"textblob\"").is_err());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<ConfigFile>("[server]\nprot = 1").is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let file: ConfigFile = toml::from_str(EXAMPLE_CONFIG).unwrap();
        let mut config = AppConfig::default();
        config.merge(file);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_env(env(&[
                (ENV_HOST, "127.0.0.1"),
                (ENV_PORT, "8080"),
                (ENV_MODEL_PATH, "/opt/models/emotion"),
            ]))
            .unwrap();
        assert_eq!(config.server.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.model.path, PathBuf::from("/opt/models/emotion"));
    }

    #[test]
    fn test_env_bad_port() {
        let mut config = AppConfig::default();
        assert!(config.apply_env(env(&[(ENV_PORT, "eighty")])).is_err());
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPort)));

        let mut config = AppConfig::default();
        config.server.max_batch_size = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroLimit("server.max_batch_size"))));

        let mut config = AppConfig::default();
        config.scoring.interpretation.concern = 6.0;
        assert!(matches!(config.validate(), Err(ConfigError::Scoring(_))));
    }

    #[test]
    fn test_explicit_config_must_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_explicit_config_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mindcare.toml");
        std::fs::write(&path, "[server]\nmax_batch_size = 10\n").unwrap();
        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.server.max_batch_size, 10);
    }

    #[test]
    fn test_write_example_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mindcare.toml");
        AppConfig::write_example(&path, false).unwrap();
        assert!(AppConfig::write_example(&path, false).is_err());
        assert!(AppConfig::write_example(&path, true).is_ok());
    }

    #[test]
    fn test_show_round_trips_through_toml() {
        let rendered = AppConfig::default().to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
