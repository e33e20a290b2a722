//! Core data models for MindCare
//!
//! These records flow through the analysis pipeline and out of the HTTP API.
//! Field names match the JSON wire format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Emotion labels the bundled model and the wellness table agree on
pub const DEFAULT_EMOTIONS: [&str; 5] = ["joy", "sadness", "anger", "anxiety", "neutral"];

/// Classifier output for a single text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionPrediction {
    /// Most probable label
    pub primary: String,
    /// Probability of `primary`, in [0, 1]
    pub confidence: f64,
    /// Probability for every label in the model's label set (sums to 1)
    #[serde(rename = "all_probabilities")]
    pub distribution: BTreeMap<String, f64>,
}

/// Rule-based sentiment scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SentimentResult {
    /// Normalized polarity in [-1, 1]
    pub compound: f64,
    /// Share of positive signal in [0, 1]
    pub positive: f64,
    /// Share of negative signal in [0, 1]
    pub negative: f64,
    /// Share of neutral signal in [0, 1]
    pub neutral: f64,
}

/// Surface statistics extracted from the raw text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LinguisticFeatures {
    pub first_person_pronouns: usize,
    pub negative_words: usize,
    pub absolute_words: usize,
    /// Distinct words / total words, 3 decimals
    pub lexical_diversity: f64,
    /// Mean words per `.`-delimited sentence, 2 decimals
    pub avg_sentence_length: f64,
    pub total_words: usize,
}

/// Everything the pipeline produces for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub emotion: EmotionPrediction,
    pub sentiment: SentimentResult,
    pub linguistic_features: LinguisticFeatures,
    /// Bounded to [0, 10], 1 decimal
    pub wellness_score: f64,
    pub interpretation: String,
    /// Character count of the analyzed text
    pub input_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_serializes_distribution_as_all_probabilities() {
        let mut distribution = BTreeMap::new();
        distribution.insert("joy".to_string(), 0.9);
        distribution.insert("neutral".to_string(), 0.1);
        let prediction = EmotionPrediction {
            primary: "joy".into(),
            confidence: 0.9,
            distribution,
        };

        let value = serde_json::to_value(&prediction).unwrap();
        assert_eq!(value["primary"], "joy");
        assert!(value.get("all_probabilities").is_some());
        assert!(value.get("distribution").is_none());
    }

    #[test]
    fn test_linguistic_features_field_names() {
        let value = serde_json::to_value(LinguisticFeatures::default()).unwrap();
        for key in [
            "first_person_pronouns",
            "negative_words",
            "absolute_words",
            "lexical_diversity",
            "avg_sentence_length",
            "total_words",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
