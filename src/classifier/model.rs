//! Bag-of-words MLP emotion classifier
//!
//! Architecture: term frequencies → Linear(hidden) → ReLU → Linear(labels) → Softmax.
//! Pure Rust, weights loaded from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::tokenizer::Tokenizer;
use super::{ClassifierError, EmotionClassifier, ModelError, ModelInfo};
use crate::models::EmotionPrediction;

/// Serialized network weights (`weights.json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlpWeights {
    /// Input vocabulary, position is the feature index
    pub vocab: Vec<String>,
    /// First layer weights [hidden_size x vocab_size]
    pub w1: Vec<Vec<f64>>,
    /// First layer bias [hidden_size]
    pub b1: Vec<f64>,
    /// Second layer weights [num_labels x hidden_size]
    pub w2: Vec<Vec<f64>>,
    /// Second layer bias [num_labels]
    pub b2: Vec<f64>,
}

impl MlpWeights {
    pub fn hidden_size(&self) -> usize {
        self.b1.len()
    }

    pub fn output_size(&self) -> usize {
        self.b2.len()
    }

    pub fn parameter_count(&self) -> usize {
        let rows = |m: &Vec<Vec<f64>>| m.iter().map(Vec::len).sum::<usize>();
        rows(&self.w1) + self.b1.len() + rows(&self.w2) + self.b2.len()
    }

    /// Check every matrix against the vocabulary, hidden and output sizes
    pub fn validate(&self) -> Result<(), ModelError> {
        let hidden = self.hidden_size();
        check_len("w1 rows", hidden, self.w1.len())?;
        for (i, row) in self.w1.iter().enumerate() {
            check_len(&format!("w1 row {i}"), self.vocab.len(), row.len())?;
        }
        check_len("w2 rows", self.output_size(), self.w2.len())?;
        for (i, row) in self.w2.iter().enumerate() {
            check_len(&format!("w2 row {i}"), hidden, row.len())?;
        }
        if self.output_size() == 0 {
            return Err(ModelError::ShapeMismatch {
                what: "b2".to_string(),
                expected: 1,
                found: 0,
            });
        }
        Ok(())
    }
}

fn check_len(what: &str, expected: usize, found: usize) -> Result<(), ModelError> {
    if expected == found {
        Ok(())
    } else {
        Err(ModelError::ShapeMismatch {
            what: what.to_string(),
            expected,
            found,
        })
    }
}

/// 2-layer MLP over a bag-of-words vocabulary
#[derive(Debug, Clone)]
pub struct MlpEmotionClassifier {
    weights: MlpWeights,
    tokenizer: Tokenizer,
    info: ModelInfo,
}

impl MlpEmotionClassifier {
    /// Build from validated weights. `labels[i]` names output `i`.
    pub fn new(
        weights: MlpWeights,
        labels: Vec<String>,
        model_type: impl Into<String>,
        model_name: impl Into<String>,
        max_length: usize,
    ) -> Result<Self, ModelError> {
        weights.validate()?;
        if labels.len() != weights.output_size() {
            return Err(ModelError::InvalidLabels(format!(
                "{} labels for {} outputs",
                labels.len(),
                weights.output_size()
            )));
        }

        let tokenizer = Tokenizer::new(&weights.vocab, max_length);
        let info = ModelInfo {
            model_type: model_type.into(),
            model_name: model_name.into(),
            labels,
            device: "cpu".to_string(),
            parameters: weights.parameter_count(),
            max_length,
        };
        Ok(Self { weights, tokenizer, info })
    }

    /// Output probabilities in label-id order
    pub fn probabilities(&self, text: &str) -> Vec<f64> {
        let input = self.tokenizer.encode(text, self.weights.vocab.len());

        // Layer 1: Linear + ReLU
        let hidden: Vec<f64> = self
            .weights
            .w1
            .iter()
            .zip(&self.weights.b1)
            .map(|(row, bias)| (bias + dot(row, &input)).max(0.0))
            .collect();

        // Layer 2: Linear
        let logits: Vec<f64> = self
            .weights
            .w2
            .iter()
            .zip(&self.weights.b2)
            .map(|(row, bias)| bias + dot(row, &hidden))
            .collect();

        softmax(&logits)
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max_logit = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max_logit).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}

impl EmotionClassifier for MlpEmotionClassifier {
    fn predict(&self, text: &str) -> Result<EmotionPrediction, ClassifierError> {
        let probs = self.probabilities(text);
        if probs.iter().any(|p| !p.is_finite()) {
            return Err(ClassifierError::Inference(
                "non-finite output probability".to_string(),
            ));
        }

        // first maximum wins ties
        let mut best = 0;
        for (i, &p) in probs.iter().enumerate() {
            if p > probs[best] {
                best = i;
            }
        }

        let distribution: BTreeMap<String, f64> = self
            .info
            .labels
            .iter()
            .cloned()
            .zip(probs.iter().copied())
            .collect();

        Ok(EmotionPrediction {
            primary: self.info.labels[best].clone(),
            confidence: probs[best],
            distribution,
        })
    }

    fn info(&self) -> &ModelInfo {
        &self.info
    }
}
