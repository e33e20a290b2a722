use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::features::FeatureExtractor;
use super::sentiment::SentimentScorer;
use super::{AnalysisError, ScoringConfig};
use crate::classifier::EmotionClassifier;
use crate::models::AnalysisResult;

/// Runs every analysis stage for one text
#[derive(Clone)]
pub struct AnalysisPipeline {
    classifier: Arc<dyn EmotionClassifier>,
    sentiment: Arc<dyn SentimentScorer>,
    extractor: FeatureExtractor,
    scoring: Arc<ScoringConfig>,
}

impl AnalysisPipeline {
    pub fn new(
        classifier: Arc<dyn EmotionClassifier>,
        sentiment: Arc<dyn SentimentScorer>,
        scoring: Arc<ScoringConfig>,
    ) -> Self {
        Self {
            classifier,
            sentiment,
            extractor: FeatureExtractor::new(),
            scoring,
        }
    }

    /// Analyze `text`. Callers are expected to reject empty input first;
    /// `input_length` is the character count of `text` as given.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let start = Instant::now();

        let emotion = self.classifier.predict(text)?;
        let sentiment = self.sentiment.score(text)?;
        let linguistic_features = self.extractor.extract(text);

        let wellness_score = self
            .scoring
            .wellness
            .score(&emotion.primary, &sentiment, &linguistic_features);
        let interpretation = self
            .scoring
            .interpretation
            .interpret(wellness_score, &emotion.primary);

        debug!(
            label = %emotion.primary,
            wellness_score,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Analyzed text"
        );

        Ok(AnalysisResult {
            emotion,
            sentiment,
            linguistic_features,
            wellness_score,
            interpretation,
            input_length: text.chars().count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{LexiconSentimentScorer, SentimentError};
    use crate::classifier::{ClassifierError, ModelInfo};
    use crate::models::{EmotionPrediction, SentimentResult};
    use std::collections::BTreeMap;

    /// Always answers with one label at full confidence
    struct StubClassifier {
        label: &'static str,
        fail: bool,
        info: ModelInfo,
    }

    impl StubClassifier {
        fn new(label: &'static str) -> Self {
            Self {
                label,
                fail: false,
                info: ModelInfo {
                    model_type: "stub".into(),
                    model_name: "stub".into(),
                    labels: vec![label.into()],
                    device: "cpu".into(),
                    parameters: 0,
                    max_length: 128,
                },
            }
        }

        fn failing() -> Self {
            Self { fail: true, ..Self::new("neutral") }
        }
    }

    impl EmotionClassifier for StubClassifier {
        fn predict(&self, _text: &str) -> Result<EmotionPrediction, ClassifierError> {
            if self.fail {
                return Err(ClassifierError::Inference("stub failure".into()));
            }
            Ok(EmotionPrediction {
                primary: self.label.into(),
                confidence: 1.0,
                distribution: BTreeMap::from([(self.label.to_string(), 1.0)]),
            })
        }

        fn info(&self) -> &ModelInfo {
            &self.info
        }
    }

    struct FixedSentiment(f64);

    impl SentimentScorer for FixedSentiment {
        fn score(&self, _text: &str) -> Result<SentimentResult, SentimentError> {
            Ok(SentimentResult { compound: self.0, neutral: 1.0, ..Default::default() })
        }
    }

    struct BrokenSentiment;

    impl SentimentScorer for BrokenSentiment {
        fn score(&self, _text: &str) -> Result<SentimentResult, SentimentError> {
            Err(SentimentError::Unavailable("offline".into()))
        }
    }

    fn pipeline(classifier: StubClassifier, sentiment: Arc<dyn SentimentScorer>) -> AnalysisPipeline {
        AnalysisPipeline::new(Arc::new(classifier), sentiment, Arc::new(ScoringConfig::default()))
    }

    #[test]
    fn test_hopeless_example() {
        let p = pipeline(StubClassifier::new("sadness"), Arc::new(LexiconSentimentScorer::new()));
        let result = p.analyze("I feel so hopeless and worthless today").unwrap();

        assert!(result.linguistic_features.negative_words >= 2);
        assert!(result.sentiment.compound < 0.0);
        assert!(result.wellness_score < 5.0);
        assert_eq!(result.input_length, 38);
        assert_eq!(
            result.interpretation,
            "Your indicators suggest significant sadness. Please reach out for support."
        );
    }

    #[test]
    fn test_anger_with_neutral_sentiment() {
        let p = pipeline(StubClassifier::new("anger"), Arc::new(FixedSentiment(0.0)));
        let result = p.analyze("The bus was late").unwrap();
        assert_eq!(result.wellness_score, 2.5);
        assert_eq!(
            result.interpretation,
            "Your indicators suggest significant anger. Please reach out for support."
        );
    }

    #[test]
    fn test_joy_reaches_top_band() {
        let p = pipeline(StubClassifier::new("joy"), Arc::new(FixedSentiment(0.5)));
        let result = p.analyze("Lovely day").unwrap();
        assert_eq!(result.wellness_score, 9.0);
        assert!(result.interpretation.starts_with("You seem to be in a positive state with joy"));
    }

    #[test]
    fn test_input_length_counts_characters() {
        let p = pipeline(StubClassifier::new("neutral"), Arc::new(FixedSentiment(0.0)));
        assert_eq!(p.analyze("ça va 😢").unwrap().input_length, 7);
    }

    #[test]
    fn test_classifier_failure_is_reported_by_stage() {
        let p = pipeline(StubClassifier::failing(), Arc::new(FixedSentiment(0.0)));
        assert!(matches!(p.analyze("hello"), Err(AnalysisError::Classification(_))));
    }

    #[test]
    fn test_sentiment_failure_is_reported_by_stage() {
        let p = pipeline(StubClassifier::new("joy"), Arc::new(BrokenSentiment));
        assert!(matches!(p.analyze("hello"), Err(AnalysisError::Sentiment(_))));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let p = pipeline(StubClassifier::new("anxiety"), Arc::new(LexiconSentimentScorer::new()));
        let text = "I always worry that nothing will work out";
        assert_eq!(p.analyze(text).unwrap(), p.analyze(text).unwrap());
    }
}
