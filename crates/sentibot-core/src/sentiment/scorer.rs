//! Per-message sentiment scoring.

use super::SentimentLabel;
use super::backend::ScoringBackend;
use super::lexicon::LexiconBackend;
use super::statistical::StatisticalBackend;
use crate::config::{ScoringMethod, SentimentConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The scored outcome for a single message.
///
/// Immutable once produced. `detail` carries the backend's informational
/// sub-scores; only `score` participates in classification and aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: f64,
    pub label: SentimentLabel,
    pub detail: BTreeMap<String, f64>,
}

impl ScoreResult {
    /// The deterministic fallback for inputs the backend cannot score.
    fn neutral() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            detail: BTreeMap::new(),
        }
    }
}

/// Maps one text to a [`ScoreResult`] using the selected backend.
///
/// Scoring is total over all string inputs: empty or unscorable text yields
/// a neutral result rather than an error, and the scorer holds no mutable
/// state, so one instance may be shared freely across threads.
pub struct Scorer {
    backend: Box<dyn ScoringBackend>,
    config: SentimentConfig,
}

impl Scorer {
    /// Creates a scorer over an explicit backend.
    pub fn new(backend: Box<dyn ScoringBackend>, config: SentimentConfig) -> Self {
        Self { backend, config }
    }

    /// Creates a scorer for the given configured method.
    pub fn from_method(method: ScoringMethod, config: SentimentConfig) -> Self {
        let backend: Box<dyn ScoringBackend> = match method {
            ScoringMethod::Lexicon => Box::new(LexiconBackend::new()),
            ScoringMethod::Statistical => Box::new(StatisticalBackend::new()),
        };
        tracing::debug!(backend = backend.name(), "scorer initialized");
        Self::new(backend, config)
    }

    /// Scores one message.
    ///
    /// Never fails: blank input short-circuits to neutral without touching
    /// the backend, and a backend that cannot produce a value is absorbed
    /// into the same neutral result.
    pub fn score_message(&self, text: &str) -> ScoreResult {
        if text.trim().is_empty() {
            return ScoreResult::neutral();
        }

        match self.backend.score(text) {
            Some(raw) => ScoreResult {
                score: raw.compound,
                label: SentimentLabel::classify(raw.compound, &self.config),
                detail: raw.detail,
            },
            None => ScoreResult::neutral(),
        }
    }
}
