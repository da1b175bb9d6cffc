//! JSON-backed intent resolver.
//!
//! Loads an intents file of the shape
//!
//! ```json
//! { "intents": [ { "tag": "hours",
//!                  "patterns": ["opening hours", "when are you open"],
//!                  "response": "We are open 24/7." } ] }
//! ```
//!
//! Construction fails with enumerable, typed conditions; resolution itself
//! is total and falls through (`None`) for unmatched input so the
//! responder's sentiment rules take over.

use sentibot_core::intent::IntentResolver;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure conditions for loading an intents file.
///
/// Deliberately narrow: anything else (e.g. a permissions error) surfaces
/// through `MissingArtifact`'s source rather than a catch-all.
#[derive(Error, Debug)]
pub enum IntentError {
    /// The intents file does not exist or cannot be read.
    #[error("intents artifact missing or unreadable: {path}")]
    MissingArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The intents file exists but is not valid intents JSON.
    #[error("intents artifact malformed: {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct IntentsFile {
    intents: Vec<Intent>,
}

#[derive(Debug, Deserialize)]
struct Intent {
    tag: String,
    patterns: Vec<String>,
    response: String,
}

/// Keyword-matching resolver over a loaded intents file.
pub struct JsonIntentResolver {
    intents: Vec<Intent>,
}

impl JsonIntentResolver {
    /// Loads an intents file from disk.
    pub fn load(path: &Path) -> Result<Self, IntentError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| IntentError::MissingArtifact {
                path: path.to_path_buf(),
                source,
            })?;

        let file: IntentsFile =
            serde_json::from_str(&contents).map_err(|source| IntentError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), intents = file.intents.len(), "intents loaded");
        Ok(Self {
            intents: file.intents,
        })
    }
}

impl IntentResolver for JsonIntentResolver {
    fn resolve(&self, text: &str) -> Option<String> {
        let lower = text.to_lowercase();
        for intent in &self.intents {
            if intent
                .patterns
                .iter()
                .any(|pattern| lower.contains(&pattern.to_lowercase()))
            {
                tracing::debug!(tag = %intent.tag, "intent matched");
                return Some(intent.response.clone());
            }
        }
        None
    }
}
