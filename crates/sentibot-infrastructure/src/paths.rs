//! Unified path management for SentiBot files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/sentibot/              # Config directory
//! └── config.toml                  # Application configuration
//!
//! ~/.local/share/sentibot/         # Data directory
//! └── transcripts/                 # Saved conversation transcripts
//!     └── conversation-YYYYMMDD-HHMMSS.json
//! ```
//!
//! Resolution goes through the `dirs` crate so the layout is correct on
//! Linux, macOS, and Windows alike.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
    /// Platform data directory could not be determined.
    DataDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find platform config directory"),
            PathError::DataDirNotFound => write!(f, "Cannot find platform data directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for SentiBot.
pub struct SentibotPaths;

impl SentibotPaths {
    /// Returns the SentiBot configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("sentibot"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path of the configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory transcripts are written to.
    pub fn transcript_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("sentibot").join("transcripts"))
            .ok_or(PathError::DataDirNotFound)
    }
}
