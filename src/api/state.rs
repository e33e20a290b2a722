//! Shared application state

use std::sync::Arc;

use super::error::ApiError;
use crate::analysis::{AnalysisPipeline, ScoringConfig, SentimentScorer};
use crate::classifier::{ClassifierSlot, ModelError};
use crate::config::AppConfig;
use crate::models::AnalysisResult;

/// Application state shared across handlers
pub struct AppState {
    pub classifier: ClassifierSlot,
    pub sentiment: Arc<dyn SentimentScorer>,
    pub scoring: Arc<ScoringConfig>,
    pub max_text_length: usize,
    pub max_batch_size: usize,
}

impl AppState {
    pub fn new(classifier: ClassifierSlot, config: &AppConfig) -> Self {
        Self {
            classifier,
            sentiment: config.scoring.sentiment.build(),
            scoring: Arc::new(config.scoring.clone()),
            max_text_length: config.server.max_text_length,
            max_batch_size: config.server.max_batch_size,
        }
    }

    pub fn with_sentiment(mut self, sentiment: Arc<dyn SentimentScorer>) -> Self {
        self.sentiment = sentiment;
        self
    }

    /// Pipeline over the shared classifier, loading it if needed
    pub async fn pipeline(&self) -> Result<AnalysisPipeline, ModelError> {
        let classifier = self.classifier.get().await?;
        Ok(AnalysisPipeline::new(
            classifier,
            Arc::clone(&self.sentiment),
            Arc::clone(&self.scoring),
        ))
    }

    /// Analyze one text on the blocking pool
    pub async fn analyze(&self, text: String) -> Result<AnalysisResult, ApiError> {
        let pipeline = self.pipeline().await?;
        let result = tokio::task::spawn_blocking(move || pipeline.analyze(&text)).await??;
        Ok(result)
    }

    /// Analyze texts in order; the first failure aborts the batch
    pub async fn analyze_batch(&self, texts: Vec<String>) -> Result<Vec<AnalysisResult>, ApiError> {
        let pipeline = self.pipeline().await?;
        let results = tokio::task::spawn_blocking(move || {
            texts
                .iter()
                .map(|text| pipeline.analyze(text))
                .collect::<Result<Vec<_>, _>>()
        })
        .await??;
        Ok(results)
    }
}
