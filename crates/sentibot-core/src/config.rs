//! Application configuration types.
//!
//! The original process-wide threshold globals are replaced by an explicit,
//! validated [`SentimentConfig`] that is constructed once at startup and
//! passed into the scorer and aggregator. Nothing in this crate reads
//! configuration from ambient state.

use crate::error::{Result, SentibotError};
use serde::{Deserialize, Serialize};

/// Which scoring backend the scorer should delegate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMethod {
    /// Rule-based valence lexicon with negation and intensifier handling.
    Lexicon,
    /// Per-word polarity/subjectivity averaging.
    Statistical,
}

impl Default for ScoringMethod {
    fn default() -> Self {
        ScoringMethod::Lexicon
    }
}

impl ScoringMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMethod::Lexicon => "lexicon",
            ScoringMethod::Statistical => "statistical",
        }
    }
}

impl std::str::FromStr for ScoringMethod {
    type Err = SentibotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lexicon" => Ok(ScoringMethod::Lexicon),
            "statistical" => Ok(ScoringMethod::Statistical),
            other => Err(SentibotError::config(format!(
                "unknown scoring method '{}', expected 'lexicon' or 'statistical'",
                other
            ))),
        }
    }
}

/// Classification thresholds shared by the scorer and the aggregator.
///
/// Invariant: `negative_threshold < positive_threshold`. This guarantees
/// that the three labels partition the score range with no gap and no
/// overlap (both boundary comparisons are inclusive).
///
/// Read-only after construction; cheap to copy into each component.
/// Deliberately not a serde type: the file-facing shape is
/// [`SentimentSettings`], which validates into this on conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentConfig {
    pub positive_threshold: f64,
    pub negative_threshold: f64,
}

impl SentimentConfig {
    /// Creates a validated threshold configuration.
    pub fn new(positive_threshold: f64, negative_threshold: f64) -> Result<Self> {
        if negative_threshold >= positive_threshold {
            return Err(SentibotError::config(format!(
                "negative_threshold ({}) must be strictly below positive_threshold ({})",
                negative_threshold, positive_threshold
            )));
        }
        Ok(Self {
            positive_threshold,
            negative_threshold,
        })
    }
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            positive_threshold: 0.3,
            negative_threshold: -0.3,
        }
    }
}

/// Bot identity and session-ending commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default = "default_bot_name")]
    pub name: String,
    #[serde(default = "default_exit_commands")]
    pub exit_commands: Vec<String>,
}

fn default_bot_name() -> String {
    "SentimentBot".to_string()
}

fn default_exit_commands() -> Vec<String> {
    ["quit", "exit", "bye", "goodbye"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            exit_commands: default_exit_commands(),
        }
    }
}

impl BotConfig {
    /// Whether the given (already trimmed) user input ends the session.
    /// Case-insensitive on both the input and the configured commands.
    pub fn is_exit_command(&self, input: &str) -> bool {
        self.exit_commands
            .iter()
            .any(|cmd| cmd.eq_ignore_ascii_case(input))
    }
}

/// Raw sentiment section of the configuration file.
///
/// Unvalidated on purpose: this is the serde-facing shape. Convert with
/// [`SentimentSettings::to_sentiment_config`] before handing thresholds to
/// the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSettings {
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
    #[serde(default)]
    pub method: ScoringMethod,
}

fn default_positive_threshold() -> f64 {
    0.3
}

fn default_negative_threshold() -> f64 {
    -0.3
}

impl Default for SentimentSettings {
    fn default() -> Self {
        Self {
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
            method: ScoringMethod::default(),
        }
    }
}

impl SentimentSettings {
    /// Validates the file-supplied thresholds into a [`SentimentConfig`].
    pub fn to_sentiment_config(&self) -> Result<SentimentConfig> {
        SentimentConfig::new(self.positive_threshold, self.negative_threshold)
    }
}

/// Root of the on-disk configuration file (config.toml).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootConfig {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub sentiment: SentimentSettings,
}
