//! Conversation-level sentiment aggregation and trend detection.

use super::SentimentLabel;
use crate::config::SentimentConfig;
use serde::{Deserialize, Serialize};

/// Minimum half-to-half average difference to call the mood moved.
const TREND_EPSILON: f64 = 0.1;

/// Directional change in sentiment between the first and second halves of a
/// conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The conversation-level verdict.
///
/// Built once per aggregation call from the full score sequence; never
/// mutated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSummary {
    pub average_score: f64,
    pub label: SentimentLabel,
    pub description: &'static str,
    pub message_count: usize,
    pub trend: Trend,
}

impl ConversationSummary {
    /// The rendered form of the "nothing to summarize" sentinel.
    ///
    /// [`Aggregator::summarize`] models absence as `None`; display layers
    /// that still need a full block to print use this.
    pub fn no_messages() -> Self {
        Self {
            average_score: 0.0,
            label: SentimentLabel::Neutral,
            description: "No messages",
            message_count: 0,
            trend: Trend::Stable,
        }
    }
}

fn describe(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "general satisfaction",
        SentimentLabel::Negative => "general dissatisfaction",
        SentimentLabel::Neutral => "balanced sentiment",
    }
}

fn mean(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Reduces an ordered per-message score sequence into a
/// [`ConversationSummary`].
pub struct Aggregator {
    config: SentimentConfig,
}

impl Aggregator {
    pub fn new(config: SentimentConfig) -> Self {
        Self { config }
    }

    /// Summarizes a chronological score sequence.
    ///
    /// Returns `None` for an empty sequence; that is the normal "no data"
    /// outcome, not a failure. Never fails for any finite input.
    pub fn summarize(&self, scores: &[f64]) -> Option<ConversationSummary> {
        if scores.is_empty() {
            return None;
        }

        let average_score = mean(scores);
        let label = SentimentLabel::classify(average_score, &self.config);

        Some(ConversationSummary {
            average_score,
            label,
            description: describe(label),
            message_count: scores.len(),
            trend: Self::trend(scores),
        })
    }

    /// Compares the averages of the first and second halves of the
    /// sequence. For odd lengths the first half is the smaller one.
    fn trend(scores: &[f64]) -> Trend {
        if scores.len() < 2 {
            return Trend::Stable;
        }

        let mid = scores.len() / 2;
        let diff = mean(&scores[mid..]) - mean(&scores[..mid]);

        if diff > TREND_EPSILON {
            Trend::Improving
        } else if diff < -TREND_EPSILON {
            Trend::Declining
        } else {
            Trend::Stable
        }
    }
}
