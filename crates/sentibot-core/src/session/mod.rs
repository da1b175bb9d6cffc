//! Conversation session model and persistence seam.

pub mod conversation;
pub mod message;
pub mod repository;

pub use conversation::Conversation;
pub use message::{MessageRole, TranscriptMessage};
pub use repository::TranscriptRepository;
