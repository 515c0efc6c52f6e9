//! Configuration for the board endpoint and display defaults.
//!
//! Configuration lives in `config.yaml` under the platform config
//! directory (e.g. `~/.config/corkboard/` on Linux) and covers:
//! - The board API endpoint
//! - Default grouping and ordering for the board view

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CorkboardError, Result};
use crate::types::{GroupBy, SortBy, ViewOptions};

/// Built-in board endpoint used when neither the environment nor the
/// config file provides one.
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Environment variable that overrides any configured endpoint.
pub const ENDPOINT_ENV_VAR: &str = "CORKBOARD_ENDPOINT";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Board API endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Default display options for the board
    #[serde(default)]
    pub display: DisplayDefaults,
}

/// Default grouping/ordering applied when no CLI flag is given
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DisplayDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl Config {
    /// Get the path to the config file, if a config directory can be
    /// determined on this platform.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "corkboard").map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from the default location, or return default
    /// if not found.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the board endpoint: environment variable first, then
    /// the config file, then the built-in default. The result is
    /// validated as an absolute URL.
    pub fn endpoint_url(&self) -> Result<Url> {
        let raw = if let Ok(endpoint) = env::var(ENDPOINT_ENV_VAR)
            && !endpoint.is_empty()
        {
            endpoint
        } else if let Some(endpoint) = &self.endpoint {
            endpoint.clone()
        } else {
            tracing::debug!("no endpoint configured, using built-in default");
            DEFAULT_ENDPOINT.to_string()
        };

        Url::parse(&raw).map_err(|e| CorkboardError::InvalidEndpoint(raw.clone(), e.to_string()))
    }

    /// Display options with config defaults applied.
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            group_by: self.display.group_by.unwrap_or_default(),
            sort_by: self.display.sort_by.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.endpoint.is_none());
        assert!(config.display.group_by.is_none());
        assert!(config.display.sort_by.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            endpoint: Some("https://boards.example.com/v2/snapshot".to_string()),
            display: DisplayDefaults {
                group_by: Some(GroupBy::User),
                sort_by: Some(SortBy::Title),
            },
        };

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(
            parsed.endpoint.as_deref(),
            Some("https://boards.example.com/v2/snapshot")
        );
        assert_eq!(parsed.display.group_by, Some(GroupBy::User));
        assert_eq!(parsed.display.sort_by, Some(SortBy::Title));
    }

    #[test]
    fn test_view_options_fall_back_to_defaults() {
        let config = Config::default();
        let options = config.view_options();
        assert_eq!(options.group_by, GroupBy::Status);
        assert_eq!(options.sort_by, SortBy::Priority);
    }

    #[test]
    fn test_endpoint_rejects_invalid_url() {
        let config = Config {
            endpoint: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.endpoint_url(),
            Err(CorkboardError::InvalidEndpoint(_, _))
        ));
    }
}
