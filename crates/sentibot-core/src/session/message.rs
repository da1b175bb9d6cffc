//! Transcript message types.

use crate::sentiment::ScoreResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the sender of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the user.
    User,
    /// Canned reply produced by the bot.
    Bot,
}

/// A single entry in the conversation transcript.
///
/// User messages carry the [`ScoreResult`] the scorer produced for them;
/// bot messages carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub role: MessageRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub sentiment: Option<ScoreResult>,
}

impl TranscriptMessage {
    pub fn user(text: impl Into<String>, sentiment: ScoreResult) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
            timestamp: Utc::now(),
            sentiment: Some(sentiment),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Bot,
            text: text.into(),
            timestamp: Utc::now(),
            sentiment: None,
        }
    }
}
