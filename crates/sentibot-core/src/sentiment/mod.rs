//! Sentiment scoring and conversation-trend engine.
//!
//! Two layered components: the [`Scorer`] turns one text into a polarity
//! score plus label, and the [`Aggregator`] reduces a conversation's ordered
//! score sequence into an overall verdict with a mood trend. Both are pure,
//! synchronous computations over their inputs and the shared read-only
//! [`SentimentConfig`](crate::config::SentimentConfig).

pub mod aggregator;
pub mod backend;
pub mod lexicon;
pub mod scorer;
pub mod statistical;

pub use aggregator::{Aggregator, ConversationSummary, Trend};
pub use backend::{RawScore, ScoringBackend};
pub use lexicon::LexiconBackend;
pub use scorer::{ScoreResult, Scorer};
pub use statistical::StatisticalBackend;

use crate::config::SentimentConfig;
use serde::{Deserialize, Serialize};

/// Three-way sentiment classification derived from a score via thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Classifies a compound score against the configured thresholds.
    ///
    /// Both boundary comparisons are inclusive; since the config guarantees
    /// `negative_threshold < positive_threshold`, exactly one label applies
    /// to every score.
    pub fn classify(score: f64, config: &SentimentConfig) -> Self {
        if score >= config.positive_threshold {
            SentimentLabel::Positive
        } else if score <= config.negative_threshold {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries_inclusive() {
        let config = SentimentConfig::default();
        assert_eq!(
            SentimentLabel::classify(0.3, &config),
            SentimentLabel::Positive
        );
        assert_eq!(
            SentimentLabel::classify(-0.3, &config),
            SentimentLabel::Negative
        );
        assert_eq!(
            SentimentLabel::classify(0.29999, &config),
            SentimentLabel::Neutral
        );
        assert_eq!(
            SentimentLabel::classify(-0.29999, &config),
            SentimentLabel::Neutral
        );
    }

    #[test]
    fn test_classify_partitions_range() {
        // Every score in a sweep over the full range gets exactly one label.
        let config = SentimentConfig::default();
        let mut p = -1.0;
        while p <= 1.0 {
            let label = SentimentLabel::classify(p, &config);
            let expected = if p >= 0.3 {
                SentimentLabel::Positive
            } else if p <= -0.3 {
                SentimentLabel::Negative
            } else {
                SentimentLabel::Neutral
            };
            assert_eq!(label, expected, "score {}", p);
            p += 0.01;
        }
    }

    #[test]
    fn test_classify_custom_thresholds() {
        let config = SentimentConfig::new(0.5, -0.1).unwrap();
        assert_eq!(
            SentimentLabel::classify(0.4, &config),
            SentimentLabel::Neutral
        );
        assert_eq!(
            SentimentLabel::classify(-0.1, &config),
            SentimentLabel::Negative
        );
    }
}
