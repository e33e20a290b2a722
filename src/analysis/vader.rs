//! Sentiment through the full VADER lexicon (`vader_sentiment` crate)

use vader_sentiment::SentimentIntensityAnalyzer;

use super::round_to;
use super::sentiment::{SentimentError, SentimentScorer};
use crate::models::SentimentResult;

const SCORE_KEYS: [&str; 4] = ["compound", "pos", "neg", "neu"];

/// VADER polarity scores, checked and rounded like the built-in scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderSentimentScorer;

impl VaderSentimentScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for VaderSentimentScorer {
    fn score(&self, text: &str) -> Result<SentimentResult, SentimentError> {
        if text.trim().is_empty() {
            return Ok(SentimentResult::default());
        }

        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);
        let [compound, positive, negative, neutral] = SCORE_KEYS.map(|key| scores.get(key).copied());
        let (Some(compound), Some(positive), Some(negative), Some(neutral)) =
            (compound, positive, negative, neutral)
        else {
            return Err(SentimentError::InvalidScore(format!(
                "missing one of {SCORE_KEYS:?} in {scores:?}"
            )));
        };

        if !(-1.0..=1.0).contains(&compound) {
            return Err(SentimentError::InvalidScore(format!("compound {compound}")));
        }
        for (name, share) in [("pos", positive), ("neg", negative), ("neu", neutral)] {
            if !(0.0..=1.0).contains(&share) {
                return Err(SentimentError::InvalidScore(format!("{name} {share}")));
            }
        }

        Ok(SentimentResult {
            compound: round_to(compound, 4),
            positive: round_to(positive, 3),
            negative: round_to(negative, 3),
            neutral: round_to(neutral, 3),
        })
    }
}
