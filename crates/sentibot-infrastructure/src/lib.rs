//! File-backed services for SentiBot: configuration loading, transcript
//! persistence, and the JSON intents resolver.

pub mod config_service;
pub mod intent_resolver;
pub mod paths;
pub mod transcript_repository;

pub use config_service::ConfigService;
pub use intent_resolver::{IntentError, JsonIntentResolver};
pub use paths::{PathError, SentibotPaths};
pub use transcript_repository::JsonTranscriptRepository;
