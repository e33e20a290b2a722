//! Model directory loading and inspection

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::model::{MlpEmotionClassifier, MlpWeights};
use super::{EmotionClassifier, ModelError, DEFAULT_MAX_LENGTH};
use crate::models::DEFAULT_EMOTIONS;

pub const CONFIG_FILE: &str = "config.json";
pub const LABELS_FILE: &str = "label_mappings.json";
pub const WEIGHTS_FILE: &str = "weights.json";

/// Files a model directory may contain, and whether each is required
const KNOWN_FILES: [(&str, bool); 3] = [(CONFIG_FILE, true), (LABELS_FILE, false), (WEIGHTS_FILE, true)];

#[derive(Debug, Deserialize)]
struct ModelConfigFile {
    #[serde(default = "default_model_type")]
    model_type: String,
    #[serde(default)]
    model_name: Option<String>,
    #[serde(default = "default_max_length")]
    max_length: usize,
}

fn default_model_type() -> String {
    "mlp".to_string()
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

#[derive(Debug, Deserialize)]
struct LabelMappings {
    id_to_label: BTreeMap<String, String>,
}

/// Load an [`MlpEmotionClassifier`] from `dir`
pub fn load_model_dir(dir: &Path) -> Result<MlpEmotionClassifier, ModelError> {
    if !dir.is_dir() {
        return Err(ModelError::DirectoryNotFound(dir.to_path_buf()));
    }
    info!("Loading emotion model from {}", dir.display());

    let config_path = dir.join(CONFIG_FILE);
    let config_value = read_json(&config_path)?;
    if config_value.as_object().map_or(true, |o| o.is_empty()) {
        return Err(ModelError::InvalidJson {
            path: config_path,
            message: "expected a non-empty JSON object".to_string(),
        });
    }
    let config: ModelConfigFile = serde_json::from_value(config_value).map_err(|e| ModelError::InvalidJson {
        path: config_path.clone(),
        message: e.to_string(),
    })?;

    let labels = load_labels(&dir.join(LABELS_FILE))?;

    let weights_path = dir.join(WEIGHTS_FILE);
    let weights: MlpWeights = serde_json::from_value(read_json(&weights_path)?).map_err(|e| {
        ModelError::InvalidJson {
            path: weights_path.clone(),
            message: e.to_string(),
        }
    })?;

    let model_name = config.model_name.unwrap_or_else(|| {
        dir.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "emotion".to_string())
    });

    let classifier = MlpEmotionClassifier::new(weights, labels, config.model_type, model_name, config.max_length)?;
    let info = classifier.info();
    info!(
        "Emotion model ready: {} labels, {} parameters",
        info.labels.len(),
        info.parameters
    );
    Ok(classifier)
}

/// Read `path` as JSON, distinguishing missing, empty and malformed files
fn read_json(path: &Path) -> Result<Value, ModelError> {
    if !path.exists() {
        return Err(ModelError::MissingFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("{}: {} bytes", path.display(), content.len());

    if content.trim().is_empty() {
        return Err(ModelError::EmptyFile(path.to_path_buf()));
    }
    serde_json::from_str(&content).map_err(|e| ModelError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Labels ordered by id. Falls back to the default label set when the file
/// is absent, unreadable or holds a malformed mapping. Ids that parse must
/// run `0..n` without gaps.
fn load_labels(path: &Path) -> Result<Vec<String>, ModelError> {
    let default_labels = || -> Vec<String> { DEFAULT_EMOTIONS.iter().map(|s| s.to_string()).collect() };

    let mappings = match read_json(path).and_then(|value| {
        serde_json::from_value::<LabelMappings>(value).map_err(|e| ModelError::InvalidJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }) {
        Ok(m) => m,
        Err(ModelError::MissingFile(_)) => {
            debug!("No {}, using default labels", LABELS_FILE);
            return Ok(default_labels());
        }
        Err(e) => {
            warn!("Ignoring {}: {}", LABELS_FILE, e);
            return Ok(default_labels());
        }
    };

    match parse_label_ids(mappings.id_to_label) {
        Ok(by_id) => contiguous_labels(by_id),
        Err(reason) => {
            warn!("Ignoring {}: {}", LABELS_FILE, reason);
            Ok(default_labels())
        }
    }
}

fn parse_label_ids(id_to_label: BTreeMap<String, String>) -> Result<BTreeMap<usize, String>, String> {
    let mut by_id = BTreeMap::new();
    for (id, label) in id_to_label {
        let id: usize = id
            .trim()
            .parse()
            .map_err(|_| format!("label id '{id}' is not a non-negative integer"))?;
        if label.trim().is_empty() {
            return Err(format!("label {id} is blank"));
        }
        if by_id.insert(id, label).is_some() {
            return Err(format!("duplicate label id {id}"));
        }
    }
    if by_id.is_empty() {
        return Err("no labels defined".to_string());
    }
    Ok(by_id)
}

fn contiguous_labels(by_id: BTreeMap<usize, String>) -> Result<Vec<String>, ModelError> {
    if let Some((position, id)) = by_id.keys().enumerate().find(|(pos, id)| pos != *id) {
        return Err(ModelError::InvalidLabels(format!(
            "label ids must be contiguous from 0, found {id} at position {position}"
        )));
    }
    Ok(by_id.into_values().collect())
}

/// Status of one model file
#[derive(Debug, Clone, PartialEq)]
pub enum FileStatus {
    /// Parsed; top-level keys (empty for non-object JSON)
    Valid { keys: Vec<String> },
    Empty,
    Invalid(String),
    Missing,
}

/// One row of a [`ModelReport`]
#[derive(Debug, Clone)]
pub struct FileReport {
    pub name: &'static str,
    pub required: bool,
    pub size: Option<u64>,
    pub status: FileStatus,
}

/// Result of inspecting a model directory without loading it
#[derive(Debug, Clone)]
pub struct ModelReport {
    pub directory: PathBuf,
    pub exists: bool,
    pub files: Vec<FileReport>,
}

impl ModelReport {
    /// True when the directory exists and every required file parses
    pub fn is_loadable(&self) -> bool {
        self.exists
            && self
                .files
                .iter()
                .filter(|f| f.required)
                .all(|f| matches!(f.status, FileStatus::Valid { .. }))
    }
}

/// Inspect every known model file in `dir`
pub fn check_model_dir(dir: &Path) -> ModelReport {
    let exists = dir.is_dir();
    let files = KNOWN_FILES
        .iter()
        .map(|&(name, required)| {
            let path = dir.join(name);
            let size = fs::metadata(&path).ok().map(|m| m.len());
            let status = match read_json(&path) {
                Ok(value) => FileStatus::Valid {
                    keys: value
                        .as_object()
                        .map(|o| o.keys().cloned().collect())
                        .unwrap_or_default(),
                },
                Err(ModelError::MissingFile(_)) => FileStatus::Missing,
                Err(ModelError::EmptyFile(_)) => FileStatus::Empty,
                Err(ModelError::InvalidJson { message, .. }) => FileStatus::Invalid(message),
                Err(e) => FileStatus::Invalid(e.to_string()),
            };
            FileReport { name, required, size, status }
        })
        .collect();

    ModelReport {
        directory: dir.to_path_buf(),
        exists,
        files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONFIG: &str = r#"{"model_type": "mlp", "model_name": "test-emotion", "max_length": 64}"#;
    const WEIGHTS: &str = r#"{
        "vocab": ["happy", "sad"],
        "w1": [[4.0, 0.0], [0.0, 4.0]],
        "b1": [0.0, 0.0],
        "w2": [[3.0, -3.0], [-3.0, 3.0]],
        "b2": [0.0, 0.0]
    }"#;
    const LABELS: &str = r#"{"id_to_label": {"1": "sadness", "0": "joy"}}"#;

    fn model_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_complete_directory() {
        let dir = model_dir(&[(CONFIG_FILE, CONFIG), (WEIGHTS_FILE, WEIGHTS), (LABELS_FILE, LABELS)]);
        let classifier = load_model_dir(dir.path()).unwrap();
        let info = classifier.info();
        assert_eq!(info.labels, vec!["joy", "sadness"]);
        assert_eq!(info.model_name, "test-emotion");
        assert_eq!(info.max_length, 64);
        assert_eq!(classifier.predict("happy").unwrap().primary, "joy");
    }

    #[test]
    fn test_missing_directory() {
        let err = load_model_dir(Path::new("/definitely/not/a/model")).unwrap_err();
        assert!(matches!(err, ModelError::DirectoryNotFound(_)));
    }

    #[test]
    fn test_missing_config() {
        let dir = model_dir(&[(WEIGHTS_FILE, WEIGHTS)]);
        assert!(matches!(load_model_dir(dir.path()), Err(ModelError::MissingFile(_))));
    }

    #[test]
    fn test_empty_and_invalid_config_are_distinct() {
        let empty = model_dir(&[(CONFIG_FILE, "  \n"), (WEIGHTS_FILE, WEIGHTS)]);
        assert!(matches!(load_model_dir(empty.path()), Err(ModelError::EmptyFile(_))));

        let invalid = model_dir(&[(CONFIG_FILE, "{not json"), (WEIGHTS_FILE, WEIGHTS)]);
        assert!(matches!(load_model_dir(invalid.path()), Err(ModelError::InvalidJson { .. })));

        let empty_object = model_dir(&[(CONFIG_FILE, "{}"), (WEIGHTS_FILE, WEIGHTS)]);
        assert!(matches!(load_model_dir(empty_object.path()), Err(ModelError::InvalidJson { .. })));
    }

    #[test]
    fn test_missing_labels_fall_back_to_defaults() {
        // default label set has five entries, these weights only two outputs
        let dir = model_dir(&[(CONFIG_FILE, CONFIG), (WEIGHTS_FILE, WEIGHTS)]);
        assert!(matches!(load_model_dir(dir.path()), Err(ModelError::InvalidLabels(_))));
    }

    #[test]
    fn test_non_contiguous_label_ids() {
        let labels = r#"{"id_to_label": {"0": "joy", "2": "sadness"}}"#;
        let dir = model_dir(&[(CONFIG_FILE, CONFIG), (WEIGHTS_FILE, WEIGHTS), (LABELS_FILE, labels)]);
        assert!(matches!(load_model_dir(dir.path()), Err(ModelError::InvalidLabels(_))));
    }

    #[test]
    fn test_malformed_label_ids_fall_back_to_defaults() {
        let config = r#"{"model_type": "mlp", "model_name": "five-way"}"#;
        let weights = r#"{
            "vocab": ["happy", "sad"],
            "w1": [[4.0, 0.0], [0.0, 4.0]],
            "b1": [0.0, 0.0],
            "w2": [[3.0, -3.0], [-3.0, 3.0], [0.0, 0.0], [0.0, 0.0], [0.0, 0.0]],
            "b2": [0.0, 0.0, 0.0, 0.0, 0.0]
        }"#;
        for labels in [
            r#"{"id_to_label": {"zero": "joy", "1": "sadness"}}"#,
            r#"{"id_to_label": {"0": "joy", "1": "  "}}"#,
            r#"{"id_to_label": {}}"#,
        ] {
            let dir = model_dir(&[(CONFIG_FILE, config), (WEIGHTS_FILE, weights), (LABELS_FILE, labels)]);
            let classifier = load_model_dir(dir.path()).unwrap();
            assert_eq!(classifier.info().labels, DEFAULT_EMOTIONS, "{labels}");
            assert_eq!(classifier.predict("happy").unwrap().primary, "joy");
        }
    }

    #[test]
    fn test_label_ids_order_numerically() {
        let ids: BTreeMap<String, String> = (0..12).map(|i| (i.to_string(), format!("l{i}"))).collect();
        let labels = contiguous_labels(parse_label_ids(ids).unwrap()).unwrap();
        assert_eq!(labels[2], "l2");
        assert_eq!(labels[10], "l10");
    }

    #[test]
    fn test_check_model_dir_report() {
        let dir = model_dir(&[(CONFIG_FILE, CONFIG), (LABELS_FILE, ""), (WEIGHTS_FILE, "[1, 2")]);
        let report = check_model_dir(dir.path());
        assert!(report.exists);
        assert!(!report.is_loadable());

        let status: Vec<&FileStatus> = report.files.iter().map(|f| &f.status).collect();
        assert!(matches!(status[0], FileStatus::Valid { keys } if keys.len() == 3));
        assert_eq!(status[1], &FileStatus::Empty);
        assert!(matches!(status[2], FileStatus::Invalid(_)));
        assert_eq!(report.files[0].size, Some(CONFIG.len() as u64));
    }

    #[test]
    fn test_check_missing_directory() {
        let report = check_model_dir(Path::new("/definitely/not/a/model"));
        assert!(!report.exists);
        assert!(report.files.iter().all(|f| f.status == FileStatus::Missing));
    }
}
