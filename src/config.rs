//! Configuration handling for the TUI

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Delay of the simulated registration request
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
/// How long a toast stays on screen
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClubConfig {
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Toast display time in milliseconds
    pub toast_duration_ms: Option<u64>,
}

impl ClubConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("club", "runclub", "run-club-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClubConfig::default();
        assert!(config.submit_delay_ms.is_none());
        assert!(config.toast_duration_ms.is_none());
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
        assert_eq!(config.toast_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_overrides() {
        let config = ClubConfig {
            submit_delay_ms: Some(250),
            toast_duration_ms: Some(1000),
        };
        assert_eq!(config.submit_delay(), Duration::from_millis(250));
        assert_eq!(config.toast_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: ClubConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submit_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"submit_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: ClubConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.submit_delay_ms, Some(10));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("run-club-tui-missing/config.json");
        let config = ClubConfig::load_from(&path).unwrap();
        assert!(config.submit_delay_ms.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("run-club-tui-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{"toast_duration_ms": 750}"#).unwrap();

        let config = ClubConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.toast_duration(), Duration::from_millis(750));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let path = std::env::temp_dir().join(format!("run-club-tui-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, "not json").unwrap();

        let result = ClubConfig::load_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = ClubConfig::config_path();
    }
}
