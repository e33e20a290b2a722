//! Bag-of-words tokenizer for the MLP classifier

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"\b\w+\b").expect("valid regex"))
}

/// Maps text to a term-frequency vector over a fixed vocabulary
#[derive(Debug, Clone)]
pub struct Tokenizer {
    index: HashMap<String, usize>,
    max_length: usize,
}

impl Tokenizer {
    /// Vocabulary position becomes the feature index. Duplicate entries keep
    /// their first position.
    pub fn new(vocab: &[String], max_length: usize) -> Self {
        let mut index = HashMap::with_capacity(vocab.len());
        for (i, word) in vocab.iter().enumerate() {
            index.entry(word.to_lowercase()).or_insert(i);
        }
        Self { index, max_length }
    }

    /// Lowercased word tokens, truncated to `max_length`
    pub fn tokens(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        token_regex()
            .find_iter(&lower)
            .take(self.max_length)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Term frequencies (count / tokens kept). All zeros when no token is in
    /// the vocabulary.
    pub fn encode(&self, text: &str, width: usize) -> Vec<f64> {
        let mut features = vec![0.0; width];
        let tokens = self.tokens(text);
        if tokens.is_empty() {
            return features;
        }
        let step = 1.0 / tokens.len() as f64;
        for token in &tokens {
            if let Some(slot) = self.index.get(token).and_then(|&i| features.get_mut(i)) {
                *slot += step;
            }
        }
        features
    }
}
