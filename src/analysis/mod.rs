//! Text analysis pipeline
//!
//! classify → sentiment → linguistic features → wellness score → interpretation
//!
//! Everything here is synchronous and CPU-bound. The HTTP layer runs it on
//! the blocking pool.

mod features;
mod interpretation;
mod lexicon;
mod pipeline;
mod sentiment;
mod vader;
mod wellness;

pub use features::{FeatureExtractor, ABSOLUTE_WORDS, FIRST_PERSON_PRONOUNS, NEGATIVE_WORDS};
pub use interpretation::{Band, InterpretationBands};
pub use pipeline::AnalysisPipeline;
pub use sentiment::{LexiconSentimentScorer, SentimentBackend, SentimentError, SentimentScorer};
pub use vader::VaderSentimentScorer;
pub use wellness::{WellnessTable, MAX_SCORE, MIN_SCORE};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classifier::ClassifierError;

/// Failure of one pipeline stage
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Emotion classification failed: {0}")]
    Classification(#[from] ClassifierError),

    #[error("Sentiment scoring failed: {0}")]
    Sentiment(#[from] SentimentError),
}

/// Invalid scoring tables
#[derive(Error, Debug, PartialEq)]
pub enum ScoringError {
    #[error("Base score for '{label}' must be within 0..=10, got {score}")]
    BaseScoreOutOfRange { label: String, score: f64 },

    #[error("{name} must be a non-negative number, got {value}")]
    InvalidCoefficient { name: &'static str, value: f64 },

    #[error("Interpretation bands must be strictly descending within 0..=10, got {positive}/{balanced}/{concern}")]
    InvalidBands {
        positive: f64,
        balanced: f64,
        concern: f64,
    },
}

/// Sentiment backend, wellness coefficients and interpretation bands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub sentiment: SentimentBackend,
    pub wellness: WellnessTable,
    pub interpretation: InterpretationBands,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringError> {
        self.wellness.validate()?;
        self.interpretation.validate()
    }
}

/// Round to `places` decimals on the exact binary value, ties to even.
/// `0.0625` becomes `0.062` and `1.125` becomes `1.12`.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.66666, 3), 0.667);
        assert_eq!(round_to(1.0 / 3.0, 2), 0.33);
        assert_eq!(round_to(-0.75481, 4), -0.7548);
        assert_eq!(round_to(2.0, 1), 2.0);
    }

    #[test]
    fn test_round_to_breaks_exact_ties_to_even() {
        assert_eq!(round_to(0.0625, 3), 0.062);
        assert_eq!(round_to(0.375, 2), 0.38);
        assert_eq!(round_to(1.125, 2), 1.12);
        assert_eq!(round_to(5.25, 1), 5.2);
        assert_eq!(round_to(5.75, 1), 5.8);
        assert_eq!(round_to(2.5, 0), 2.0);
    }

    #[test]
    fn test_round_to_uses_the_stored_value() {
        // 2.675 is stored as 2.67499999...
        assert_eq!(round_to(2.675, 2), 2.67);
        assert_eq!(round_to(0.35, 1), 0.3);
    }

    #[test]
    fn test_default_scoring_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }
}
