//! Transcript repository trait.
//!
//! Defines the interface for persisting a finished conversation,
//! decoupling the session loop from the specific storage mechanism
//! (e.g. JSON files under the platform data directory).

use super::conversation::Conversation;
use crate::error::Result;
use std::path::PathBuf;

/// An abstract repository for persisting conversation transcripts.
///
/// Implementations must persist, for every user message, the score result
/// the core produced for it; the document schema beyond that is the
/// implementation's concern.
pub trait TranscriptRepository: Send + Sync {
    /// Saves the conversation, returning the path it was written to.
    fn save(&self, conversation: &Conversation) -> Result<PathBuf>;
}
