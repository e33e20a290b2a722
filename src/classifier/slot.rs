//! Construct-once holder for the process-wide classifier
//!
//! The first caller runs the loader on the blocking pool while concurrent
//! callers wait on the same initialization. A failed load leaves the slot
//! empty, so the next caller tries again.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::loader::load_model_dir;
use super::{EmotionClassifier, ModelError};

type Loader = dyn Fn() -> Result<Arc<dyn EmotionClassifier>, ModelError> + Send + Sync;

pub struct ClassifierSlot {
    cell: OnceCell<Arc<dyn EmotionClassifier>>,
    loader: Arc<Loader>,
}

impl ClassifierSlot {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn EmotionClassifier>, ModelError> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            loader: Arc::new(loader),
        }
    }

    /// Slot that loads the bundled MLP format from `dir`
    pub fn from_directory(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self::new(move || {
            let classifier = load_model_dir(&dir)?;
            Ok(Arc::new(classifier) as Arc<dyn EmotionClassifier>)
        })
    }

    /// Slot that is already initialized
    pub fn ready(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self {
            cell: OnceCell::new_with(Some(classifier)),
            loader: Arc::new(|| -> Result<Arc<dyn EmotionClassifier>, ModelError> {
                Err(ModelError::LoaderFailed("slot was created pre-loaded".to_string()))
            }),
        }
    }

    /// Shared classifier, loading it on first use
    pub async fn get(&self) -> Result<Arc<dyn EmotionClassifier>, ModelError> {
        let classifier = self
            .cell
            .get_or_try_init(|| async {
                let loader = Arc::clone(&self.loader);
                tokio::task::spawn_blocking(move || (*loader)())
                    .await
                    .map_err(|e| ModelError::LoaderFailed(e.to_string()))?
            })
            .await?;
        Ok(Arc::clone(classifier))
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Startup warm-up. Failures are logged; requests retry the load later.
    pub async fn preload(&self) {
        match self.get().await {
            Ok(classifier) => info!("Emotion model preloaded: {}", classifier.info().model_name),
            Err(e) => warn!("Could not preload emotion model: {}", e),
        }
    }
}
