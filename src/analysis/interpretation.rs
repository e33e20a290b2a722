//! Threshold bands that turn a wellness score into a sentence

use serde::{Deserialize, Serialize};

use super::wellness::{MAX_SCORE, MIN_SCORE};
use super::ScoringError;

/// Lower bounds (inclusive) of the three upper bands; anything below
/// `concern` falls in the lowest band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpretationBands {
    pub positive: f64,
    pub balanced: f64,
    pub concern: f64,
}

impl Default for InterpretationBands {
    fn default() -> Self {
        Self {
            positive: 7.5,
            balanced: 5.0,
            concern: 3.0,
        }
    }
}

/// Band a score falls into, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Positive,
    Balanced,
    Concern,
    Support,
}

impl InterpretationBands {
    pub fn band(&self, score: f64) -> Band {
        if score >= self.positive {
            Band::Positive
        } else if score >= self.balanced {
            Band::Balanced
        } else if score >= self.concern {
            Band::Concern
        } else {
            Band::Support
        }
    }

    pub fn interpret(&self, score: f64, label: &str) -> String {
        match self.band(score) {
            Band::Positive => {
                format!("You seem to be in a positive state with {label} emotion. Keep it up!")
            }
            Band::Balanced => {
                format!("Your emotional state appears balanced, though showing {label}.")
            }
            Band::Concern => {
                format!("You seem to be experiencing {label}. Consider talking to someone.")
            }
            Band::Support => {
                format!("Your indicators suggest significant {label}. Please reach out for support.")
            }
        }
    }

    /// Thresholds must lie in [0, 10] and be strictly descending
    pub fn validate(&self) -> Result<(), ScoringError> {
        let thresholds = [self.positive, self.balanced, self.concern];
        let in_range = thresholds
            .iter()
            .all(|t| t.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(t));
        let descending = thresholds.windows(2).all(|w| w[0] > w[1]);
        if in_range && descending {
            Ok(())
        } else {
            Err(ScoringError::InvalidBands {
                positive: self.positive,
                balanced: self.balanced,
                concern: self.concern,
            })
        }
    }
}
