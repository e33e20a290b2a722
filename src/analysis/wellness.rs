//! Wellness score
//!
//! Combines the classifier label, sentiment and feature counts into one
//! bounded score: a per-emotion base, shifted by sentiment and reduced by a
//! capped penalty for depression-indicator vocabulary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{round_to, ScoringError};
use crate::models::{LinguisticFeatures, SentimentResult};

/// Lowest possible wellness score
pub const MIN_SCORE: f64 = 0.0;
/// Highest possible wellness score
pub const MAX_SCORE: f64 = 10.0;

/// Scoring coefficients and the per-emotion base table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellnessTable {
    /// Base score per emotion label
    pub base_scores: BTreeMap<String, f64>,
    /// Base score for labels missing from `base_scores`
    pub default_base: f64,
    /// Multiplier applied to the sentiment compound
    pub sentiment_weight: f64,
    /// Penalty per negative-word occurrence
    pub negative_word_weight: f64,
    /// Cap on the total negative-word penalty
    pub max_negative_penalty: f64,
}

impl Default for WellnessTable {
    fn default() -> Self {
        let base_scores = [
            ("joy", 8.0),
            ("neutral", 5.0),
            ("sadness", 3.0),
            ("anxiety", 3.5),
            ("anger", 2.5),
        ]
        .into_iter()
        .map(|(label, score)| (label.to_string(), score))
        .collect();

        Self {
            base_scores,
            default_base: 5.0,
            sentiment_weight: 2.0,
            negative_word_weight: 0.5,
            max_negative_penalty: 2.0,
        }
    }
}

impl WellnessTable {
    /// Base score for `label`, falling back to `default_base`
    pub fn base_for(&self, label: &str) -> f64 {
        self.base_scores.get(label).copied().unwrap_or(self.default_base)
    }

    /// Score in [0, 10], rounded to 1 decimal
    pub fn score(&self, label: &str, sentiment: &SentimentResult, features: &LinguisticFeatures) -> f64 {
        let adjustment = sentiment.compound * self.sentiment_weight;
        let penalty = (features.negative_words as f64 * self.negative_word_weight)
            .min(self.max_negative_penalty);
        let raw = self.base_for(label) + adjustment - penalty;

        round_to(raw.clamp(MIN_SCORE, MAX_SCORE), 1)
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        let in_range = |v: f64| v.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&v);

        for (label, &score) in &self.base_scores {
            if !in_range(score) {
                return Err(ScoringError::BaseScoreOutOfRange { label: label.clone(), score });
            }
        }
        if !in_range(self.default_base) {
            return Err(ScoringError::BaseScoreOutOfRange {
                label: "<default>".to_string(),
                score: self.default_base,
            });
        }
        for (name, value) in [
            ("sentiment_weight", self.sentiment_weight),
            ("negative_word_weight", self.negative_word_weight),
            ("max_negative_penalty", self.max_negative_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::InvalidCoefficient { name, value });
            }
        }
        Ok(())
    }
}
