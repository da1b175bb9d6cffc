//! The in-memory conversation log for one session.

use super::message::{MessageRole, TranscriptMessage};
use crate::sentiment::ScoreResult;
use chrono::{DateTime, Duration, Utc};

/// Ordered message log for a single chat session.
///
/// Owned and appended to by exactly one producer (the session loop); the
/// aggregator reads [`Conversation::user_scores`] wholesale after the
/// producer is done appending.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<TranscriptMessage>,
    started_at: DateTime<Utc>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Appends a user message together with its score.
    pub fn add_user_message(&mut self, text: impl Into<String>, sentiment: ScoreResult) {
        self.messages.push(TranscriptMessage::user(text, sentiment));
    }

    /// Appends a bot reply.
    pub fn add_bot_message(&mut self, text: impl Into<String>) {
        self.messages.push(TranscriptMessage::bot(text));
    }

    /// All messages in chronological order.
    pub fn messages(&self) -> &[TranscriptMessage] {
        &self.messages
    }

    /// Texts of user messages only, in chronological order.
    pub fn user_messages(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .map(|m| m.text.as_str())
            .collect()
    }

    /// Per-message compound scores for user messages, in chronological
    /// order. This is the sequence the aggregator consumes.
    pub fn user_scores(&self) -> Vec<f64> {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .filter_map(|m| m.sentiment.as_ref())
            .map(|s| s.score)
            .collect()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Elapsed time since the session started.
    pub fn duration(&self) -> Duration {
        Utc::now() - self.started_at
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drops all messages and restarts the session clock.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.started_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScoringMethod, SentimentConfig};
    use crate::sentiment::Scorer;

    fn scored(text: &str) -> ScoreResult {
        Scorer::from_method(ScoringMethod::Lexicon, SentimentConfig::default())
            .score_message(text)
    }

    #[test]
    fn test_user_scores_preserve_order_and_skip_bot_messages() {
        let mut conversation = Conversation::new();
        conversation.add_user_message("this is great", scored("this is great"));
        conversation.add_bot_message("Glad to hear it!");
        conversation.add_user_message("now it is terrible", scored("now it is terrible"));

        let scores = conversation.user_scores();
        assert_eq!(scores.len(), 2);
        assert!(scores[0] > 0.0);
        assert!(scores[1] < 0.0);
        assert_eq!(conversation.len(), 3);
    }

    #[test]
    fn test_user_messages_filter() {
        let mut conversation = Conversation::new();
        conversation.add_user_message("hello", scored("hello"));
        conversation.add_bot_message("Hi there!");
        assert_eq!(conversation.user_messages(), vec!["hello"]);
    }

    #[test]
    fn test_clear_resets_log() {
        let mut conversation = Conversation::new();
        conversation.add_user_message("hello", scored("hello"));
        conversation.clear();
        assert!(conversation.is_empty());
        assert!(conversation.user_scores().is_empty());
    }
}
