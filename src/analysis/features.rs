//! Linguistic feature extraction
//!
//! Counts the surface markers used as wellness indicators: first-person
//! focus, depression-related vocabulary and absolutist language, plus
//! lexical diversity and sentence length.
//!
//! Lexicon matching is substring based, not token based. A negative word
//! inside a longer word still counts, and pronouns or absolute words only
//! count with the exact surrounding characters listed below. The wellness
//! penalties are calibrated against these counts, so keep the matching as is.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use super::round_to;
use crate::models::LinguisticFeatures;

/// Pronouns counted for self-focus
pub const FIRST_PERSON_PRONOUNS: [&str; 5] = ["i", "me", "my", "mine", "myself"];

/// Depression-indicator lexicon
pub const NEGATIVE_WORDS: [&str; 18] = [
    "sad", "depressed", "hopeless", "worthless", "tired", "exhausted",
    "alone", "lonely", "empty", "numb", "helpless", "useless",
    "horrible", "terrible", "awful", "miserable", "hate", "hurt",
];

/// Absolutist language lexicon
pub const ABSOLUTE_WORDS: [&str; 7] = [
    "always", "never", "nothing", "nobody", "none", "everyone", "everything",
];

fn word_regex() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\b\w+\b").expect("valid regex"))
}

/// Extracts [`LinguisticFeatures`] from raw text
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all features from `text`
    pub fn extract(&self, text: &str) -> LinguisticFeatures {
        let lower = text.to_lowercase();
        let words: Vec<&str> = word_regex().find_iter(&lower).map(|m| m.as_str()).collect();

        LinguisticFeatures {
            first_person_pronouns: count_pronouns(&lower),
            negative_words: count_negative_words(&lower),
            absolute_words: count_absolute_words(&lower),
            lexical_diversity: lexical_diversity(&words),
            avg_sentence_length: avg_sentence_length(text),
            total_words: words.len(),
        }
    }
}

/// `" p "`, `" p,"` and `" p."` occurrences, plus one for a leading `"p "`.
/// A pronoun at the very end or before `!`/`?` is not seen.
fn count_pronouns(lower: &str) -> usize {
    FIRST_PERSON_PRONOUNS
        .iter()
        .map(|p| {
            let leading = usize::from(lower.starts_with(&format!("{p} ")));
            lower.matches(&format!(" {p} ")).count()
                + lower.matches(&format!(" {p},")).count()
                + lower.matches(&format!(" {p}.")).count()
                + leading
        })
        .sum()
}

fn count_negative_words(lower: &str) -> usize {
    NEGATIVE_WORDS.iter().map(|w| lower.matches(w).count()).sum()
}

/// Requires a trailing space, so a word that ends the text is never counted
fn count_absolute_words(lower: &str) -> usize {
    ABSOLUTE_WORDS
        .iter()
        .map(|w| lower.matches(&format!(" {w} ")).count())
        .sum()
}

fn lexical_diversity(words: &[&str]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let unique: HashSet<&str> = words.iter().copied().collect();
    round_to(unique.len() as f64 / words.len() as f64, 3)
}

fn avg_sentence_length(text: &str) -> f64 {
    let sentences: Vec<&str> = text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if sentences.is_empty() {
        return 0.0;
    }
    let total: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    round_to(total as f64 / sentences.len() as f64, 2)
}
