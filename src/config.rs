//! Session options supplied by the host page or, natively, a JSON file.
//!
//! The file tree and home directory are compiled in and not configurable.

use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShellConfig {
    /// User shown in the prompt.
    pub user: String,
    /// Host shown in the prompt.
    pub hostname: String,
    /// Oldest entries are dropped past this many.
    pub history_limit: usize,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            hostname: "portfolio".to_string(),
            history_limit: 500,
            log_level: "info".to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Unknown level names fall back to `info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ShellConfig::from_json(r#"{"user": "neo", "historyLimit": 3}"#).unwrap();
        assert_eq!(config.user, "neo");
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.hostname, "portfolio");
    }

    #[test]
    fn test_invalid_json() {
        let err = ShellConfig::from_json("{user:").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_level_filter() {
        let mut config = ShellConfig::default();
        assert_eq!(config.level_filter(), LevelFilter::Info);
        config.log_level = "debug".into();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ShellConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
