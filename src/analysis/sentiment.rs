//! Rule-based sentiment scoring
//!
//! `LexiconSentimentScorer` follows the usual valence-aware recipe: look up
//! each token's valence, adjust it for nearby boosters, negations and
//! ALL-CAPS emphasis, weight clauses around "but", then fold the sum into a
//! compound score in [-1, 1] together with positive/negative/neutral
//! proportions.
//!
//! Its lexicon is a compact subset. The default backend is
//! [`VaderSentimentScorer`], which carries the full VADER vocabulary;
//! [`SentimentBackend`] picks one from configuration.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

use super::lexicon::{BOOSTERS, CAPS_INCR, NEGATIONS, NEGATION_SCALAR, VALENCES};
use super::round_to;
use super::vader::VaderSentimentScorer;
use crate::models::SentimentResult;

/// Normalization constant for the compound score
const ALPHA: f64 = 15.0;
const EXCLAMATION_INCR: f64 = 0.292;
const QUESTION_INCR: f64 = 0.18;
const MAX_QUESTION_INCR: f64 = 0.96;

/// Errors a sentiment backend can report
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("sentiment backend unavailable: {0}")]
    Unavailable(String),

    #[error("sentiment backend returned an invalid score: {0}")]
    InvalidScore(String),
}

/// Anything that can turn text into a [`SentimentResult`]
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Result<SentimentResult, SentimentError>;
}

/// Which [`SentimentScorer`] the service runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBackend {
    /// Full VADER lexicon
    #[default]
    Vader,
    /// Built-in rules over the compact lexicon
    Lexicon,
}

impl SentimentBackend {
    pub fn build(self) -> Arc<dyn SentimentScorer> {
        match self {
            Self::Vader => Arc::new(VaderSentimentScorer::new()),
            Self::Lexicon => Arc::new(LexiconSentimentScorer::new()),
        }
    }
}

/// Lexicon and rule based sentiment scorer
pub struct LexiconSentimentScorer {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
}

impl Default for LexiconSentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconSentimentScorer {
    fn score(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        Ok(self.polarity(text))
    }
}

impl LexiconSentimentScorer {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Number of words with a known valence
    pub fn vocabulary_size(&self) -> usize {
        self.valences.len()
    }

    /// Score `text`. Compound is rounded to 4 decimals, proportions to 3.
    pub fn polarity(&self, text: &str) -> SentimentResult {
        let tokens = tokenize(text);
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_differential = has_cap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            let word = lowered[i].as_str();
            if self.boosters.contains_key(word) {
                sentiments.push(0.0);
                continue;
            }
            // "kind of" is a hedge, not kindness
            if word == "kind" && lowered.get(i + 1).is_some_and(|next| next == "of") {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.valence_at(&tokens, &lowered, i, cap_differential));
        }

        apply_contrast(&lowered, &mut sentiments);
        score_valences(&sentiments, text)
    }

    fn valence_at(&self, tokens: &[&str], lowered: &[String], i: usize, cap_differential: bool) -> f64 {
        let Some(&base) = self.valences.get(lowered[i].as_str()) else {
            return 0.0;
        };

        // "no" in front of another sentiment word acts as a determiner
        if lowered[i] == "no"
            && lowered
                .get(i + 1)
                .is_some_and(|next| self.valences.contains_key(next.as_str()))
        {
            return 0.0;
        }

        let mut valence = base;
        if self.preceded_by_no(lowered, i) {
            valence = base * NEGATION_SCALAR;
        }

        if cap_differential && is_upper(tokens[i]) {
            valence += if valence > 0.0 { CAPS_INCR } else { -CAPS_INCR };
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prev = lowered[i - distance].as_str();
            if self.valences.contains_key(prev) {
                continue;
            }
            let mut scalar = self.booster_scalar(tokens[i - distance], prev, valence, cap_differential);
            if distance == 2 {
                scalar *= 0.95;
            } else if distance == 3 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = self.negation_check(valence, lowered, distance, i);
        }

        least_check(valence, lowered, i)
    }

    fn preceded_by_no(&self, lowered: &[String], i: usize) -> bool {
        (i > 0 && lowered[i - 1] == "no")
            || (i > 1 && lowered[i - 2] == "no")
            || (i > 2 && lowered[i - 3] == "no" && matches!(lowered[i - 1].as_str(), "or" | "nor"))
    }

    fn booster_scalar(&self, token: &str, word: &str, valence: f64, cap_differential: bool) -> f64 {
        let Some(&boost) = self.boosters.get(word) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -boost } else { boost };
        if cap_differential && is_upper(token) {
            scalar += if valence > 0.0 { CAPS_INCR } else { -CAPS_INCR };
        }
        scalar
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.contains("n't")
    }

    fn negation_check(&self, valence: f64, lowered: &[String], distance: usize, i: usize) -> f64 {
        let at = |d: usize| lowered[i - d].as_str();
        match distance {
            1 if self.is_negation(at(1)) => valence * NEGATION_SCALAR,
            2 => {
                if at(2) == "never" && matches!(at(1), "so" | "this") {
                    valence * 1.25
                } else if at(2) == "without" && at(1) == "doubt" {
                    valence
                } else if self.is_negation(at(2)) {
                    valence * NEGATION_SCALAR
                } else {
                    valence
                }
            }
            3 => {
                if at(3) == "never"
                    && (matches!(at(2), "so" | "this") || matches!(at(1), "so" | "this"))
                {
                    valence * 1.25
                } else if at(3) == "without" && (at(2) == "doubt" || at(1) == "doubt") {
                    valence
                } else if self.is_negation(at(3)) {
                    valence * NEGATION_SCALAR
                } else {
                    valence
                }
            }
            _ => valence,
        }
    }
}

/// Whitespace tokens with surrounding punctuation stripped, unless stripping
/// would leave two characters or fewer (keeps emoticons like ":)" intact)
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|token| {
            let stripped = token.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                token
            } else {
                stripped
            }
        })
        .collect()
}

fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// True when some, but not all, tokens are ALL CAPS
fn has_cap_differential(tokens: &[&str]) -> bool {
    let all_caps = tokens.iter().filter(|t| is_upper(t)).count();
    let differential = tokens.len() - all_caps;
    differential > 0 && differential < tokens.len()
}

/// "least" in front of a sentiment word flips it, except in "at least"/"very least"
fn least_check(valence: f64, lowered: &[String], i: usize) -> f64 {
    if i == 0 || lowered[i - 1] != "least" {
        return valence;
    }
    if i > 1 && matches!(lowered[i - 2].as_str(), "at" | "very") {
        return valence;
    }
    valence * NEGATION_SCALAR
}

/// Clauses before "but" count half, clauses after count one and a half
fn apply_contrast(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (idx, sentiment) in sentiments.iter_mut().enumerate() {
        if idx < pivot {
            *sentiment *= 0.5;
        } else if idx > pivot {
            *sentiment *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * EXCLAMATION_INCR;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * QUESTION_INCR,
        _ => MAX_QUESTION_INCR,
    };
    exclamations + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn score_valences(sentiments: &[f64], text: &str) -> SentimentResult {
    if sentiments.is_empty() {
        return SentimentResult::default();
    }

    let emphasis = punctuation_emphasis(text);
    let mut total: f64 = sentiments.iter().sum();
    if total > 0.0 {
        total += emphasis;
    } else if total < 0.0 {
        total -= emphasis;
    }
    let compound = normalize(total);

    let mut positive = 0.0;
    let mut negative = 0.0;
    let mut neutral = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            positive += s + 1.0;
        } else if s < 0.0 {
            negative += s - 1.0;
        } else {
            neutral += 1.0;
        }
    }
    if positive > negative.abs() {
        positive += emphasis;
    } else if positive < negative.abs() {
        negative -= emphasis;
    }

    // every token adds at least 1 to one of the buckets
    let denominator = positive + negative.abs() + neutral;
    SentimentResult {
        compound: round_to(compound, 4),
        positive: round_to((positive / denominator).abs(), 3),
        negative: round_to((negative / denominator).abs(), 3),
        neutral: round_to((neutral / denominator).abs(), 3),
    }
}
