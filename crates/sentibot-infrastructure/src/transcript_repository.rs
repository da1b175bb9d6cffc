//! JSON file transcript repository.

use sentibot_core::error::Result;
use sentibot_core::session::{Conversation, TranscriptMessage, TranscriptRepository};
use serde::Serialize;
use std::path::PathBuf;

/// The persisted transcript document.
#[derive(Debug, Serialize)]
struct TranscriptDocument<'a> {
    messages: &'a [TranscriptMessage],
    started_at: String,
    duration_seconds: f64,
}

/// Persists conversations as pretty-printed JSON files, one per session,
/// named by the session start time.
pub struct JsonTranscriptRepository {
    dir: PathBuf,
}

impl JsonTranscriptRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TranscriptRepository for JsonTranscriptRepository {
    fn save(&self, conversation: &Conversation) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;

        let document = TranscriptDocument {
            messages: conversation.messages(),
            started_at: conversation.started_at().to_rfc3339(),
            duration_seconds: conversation.duration().num_milliseconds() as f64 / 1000.0,
        };

        let filename = format!(
            "conversation-{}.json",
            conversation.started_at().format("%Y%m%d-%H%M%S")
        );
        let path = self.dir.join(filename);

        std::fs::write(&path, serde_json::to_string_pretty(&document)?)?;
        tracing::info!(path = %path.display(), messages = conversation.len(), "transcript saved");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentibot_core::config::{ScoringMethod, SentimentConfig};
    use sentibot_core::sentiment::Scorer;

    fn sample_conversation() -> Conversation {
        let scorer = Scorer::from_method(ScoringMethod::Lexicon, SentimentConfig::default());
        let mut conversation = Conversation::new();
        conversation.add_user_message("this is great", scorer.score_message("this is great"));
        conversation.add_bot_message("Great! I'm happy for you.");
        conversation
    }

    #[test]
    fn test_save_writes_json_document() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonTranscriptRepository::new(dir.path());

        let path = repository.save(&sample_conversation()).unwrap();
        assert!(path.exists());

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["messages"].as_array().unwrap().len(), 2);
        assert!(parsed["started_at"].is_string());
        assert!(parsed["duration_seconds"].as_f64().unwrap() >= 0.0);
    }

    #[test]
    fn test_user_message_embeds_score_result() {
        let dir = tempfile::tempdir().unwrap();
        let repository = JsonTranscriptRepository::new(dir.path());

        let path = repository.save(&sample_conversation()).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        let user_message = &parsed["messages"][0];
        assert_eq!(user_message["role"], "user");
        assert_eq!(user_message["sentiment"]["label"], "Positive");
        assert!(user_message["sentiment"]["score"].as_f64().unwrap() > 0.0);

        let bot_message = &parsed["messages"][1];
        assert!(bot_message["sentiment"].is_null());
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("transcripts");
        let repository = JsonTranscriptRepository::new(&nested);

        let path = repository.save(&sample_conversation()).unwrap();
        assert!(path.starts_with(&nested));
    }
}
