//! MindCare text analysis library
//!
//! ```no_run
//! use std::sync::Arc;
//! use mindcare::analysis::{AnalysisPipeline, ScoringConfig, VaderSentimentScorer};
//! use mindcare::classifier::load_model_dir;
//!
//! let classifier = load_model_dir("models/emotion".as_ref())?;
//! let pipeline = AnalysisPipeline::new(
//!     Arc::new(classifier),
//!     Arc::new(VaderSentimentScorer::new()),
//!     Arc::new(ScoringConfig::default()),
//! );
//! let result = pipeline.analyze("I feel so hopeless and worthless today")?;
//! println!("{} -> {}", result.emotion.primary, result.wellness_score);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analysis;
pub mod api;
pub mod classifier;
pub mod config;
pub mod models;

pub use analysis::{AnalysisError, AnalysisPipeline};
pub use classifier::{ClassifierSlot, EmotionClassifier};
pub use models::{AnalysisResult, EmotionPrediction, LinguisticFeatures, SentimentResult};
