//! The scoring backend abstraction.
//!
//! A backend maps a text to a raw compound polarity value plus whatever
//! informational sub-scores it exposes. The scorer delegates to exactly one
//! backend and never branches on which one is active; callers only see the
//! differing `detail` keys.

use std::collections::BTreeMap;

/// The raw output of a scoring backend before threshold classification.
#[derive(Debug, Clone, PartialEq)]
pub struct RawScore {
    /// Overall polarity in the backend's fixed range (both built-in
    /// backends produce values in -1.0..=1.0).
    pub compound: f64,
    /// Named sub-scores, informational only (e.g. positive/negative/neutral
    /// weights for the lexicon backend, polarity/subjectivity for the
    /// statistical one).
    pub detail: BTreeMap<String, f64>,
}

impl RawScore {
    pub fn new(compound: f64) -> Self {
        Self {
            compound,
            detail: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: &str, value: f64) -> Self {
        self.detail.insert(key.to_string(), value);
        self
    }
}

/// A sentiment-scoring method.
///
/// Implementations must be deterministic and stateless after construction so
/// the scorer stays a pure function of its input text. Returning `None`
/// signals that the backend could not produce a value for this input; the
/// scorer absorbs that case into a neutral result rather than surfacing an
/// error.
pub trait ScoringBackend: Send + Sync {
    /// Scores one text. Must not panic for any string input.
    fn score(&self, text: &str) -> Option<RawScore>;

    /// Short identifier used for logging and display.
    fn name(&self) -> &'static str;
}
