//! Configuration service implementation.
//!
//! Loads the root configuration from the configuration file
//! (~/.config/sentibot/config.toml), writing defaults when the file does
//! not exist yet, and caches the result to avoid repeated file I/O.

use crate::paths::SentibotPaths;
use sentibot_core::config::RootConfig;
use sentibot_core::error::{Result, SentibotError};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file path; falls back to the platform default when `None`.
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService over the platform default config path.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService over an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// Load failures fall back to the built-in defaults; a chatbot that
    /// cannot read its config file should still start.
    pub fn get_config(&self) -> RootConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load config, using defaults");
            RootConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => SentibotPaths::config_file()
                .map_err(|e| SentibotError::config(e.to_string())),
        }
    }

    /// Loads RootConfig from the config file, creating it with defaults
    /// when missing.
    fn load_config(&self) -> Result<RootConfig> {
        let path = self.config_path()?;

        if !path.exists() {
            let default_config = RootConfig::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, toml::to_string_pretty(&default_config)?)?;
            tracing::info!(path = %path.display(), "wrote default config");
            return Ok(default_config);
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: RootConfig = toml::from_str(&contents)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentibot_core::config::ScoringMethod;

    #[test]
    fn test_missing_file_creates_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let service = ConfigService::with_path(path.clone());
        let config = service.get_config();

        assert_eq!(config, RootConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_loads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [bot]
            name = "MoodBot"

            [sentiment]
            positive_threshold = 0.5
            method = "statistical"
            "#,
        )
        .unwrap();

        let config = ConfigService::with_path(path).get_config();
        assert_eq!(config.bot.name, "MoodBot");
        assert_eq!(config.sentiment.positive_threshold, 0.5);
        assert_eq!(config.sentiment.method, ScoringMethod::Statistical);
    }

    #[test]
    fn test_unreadable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml").unwrap();

        let config = ConfigService::with_path(path).get_config();
        assert_eq!(config, RootConfig::default());
    }

    #[test]
    fn test_cache_survives_file_change_until_invalidated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let service = ConfigService::with_path(path.clone());
        let first = service.get_config();

        std::fs::write(&path, "[bot]\nname = \"Other\"\n").unwrap();
        assert_eq!(service.get_config(), first);

        service.invalidate_cache();
        assert_eq!(service.get_config().bot.name, "Other");
    }
}
