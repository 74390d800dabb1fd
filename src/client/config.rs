//! Configuration handling for notion-cli
//!
//! Settings are resolved once at startup, highest priority first:
//! 1. Command-line flags
//! 2. Environment variables (`NOTION_TOKEN`, `NOTION_DEFAULT_DB`, ...; wired
//!    through clap, so they arrive here as overrides)
//! 3. `config.toml` in the user config directory, or the `--config` path
//! 4. Built-in defaults
//!
//! Example `config.toml`:
//!
//! ```toml
//! token = "secret_..."
//! default_database_id = "2f9871232f4580b6bf51e923c03cb30f"
//! default_status = "Not Started"
//!
//! [properties]
//! title = "Task name"
//! status = "Status"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{PageId, PropertyNames};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
pub const DEFAULT_API_VERSION: &str = "2022-06-28";
pub const DEFAULT_STATUS: &str = "Not Started";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No API token configured. Set NOTION_TOKEN, pass --token, or add `token` to {0}")]
    MissingToken(String),

    #[error("No database ID given and no default database configured (NOTION_DEFAULT_DB)")]
    MissingDatabase,

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FileConfig {
    /// Integration token (`secret_...` / `ntn_...`)
    pub token: Option<String>,

    /// Database used by `create` and `query` when none is given
    pub default_database_id: Option<String>,

    /// Value of the `Notion-Version` header
    pub api_version: Option<String>,

    /// API base URL
    pub base_url: Option<String>,

    /// Status given to new tasks when `--status` is omitted
    pub default_status: Option<String>,

    /// Property column names of the task database
    pub properties: PropertyNames,
}

impl FileConfig {
    /// Parses a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub token: Option<String>,
    pub default_database_id: Option<String>,
    pub api_version: Option<String>,
    pub base_url: Option<String>,
    /// Explicit config file; must exist when given
    pub config_path: Option<PathBuf>,
}

/// Fully resolved settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub token: Option<String>,
    pub default_database_id: Option<String>,
    pub api_version: String,
    pub base_url: String,
    pub default_status: String,
    pub properties: PropertyNames,
    /// Config file that was read, if any
    pub config_path: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings from overrides and the config file
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let path = match &overrides.config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.clone()).into());
            }
            Some(path) => Some(path.clone()),
            None => Self::default_config_path().filter(|p| p.is_file()),
        };

        let file = match &path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(file, overrides, path))
    }

    /// Layers overrides on top of a parsed config file
    pub fn merge(file: FileConfig, overrides: &ConfigOverrides, path: Option<PathBuf>) -> Self {
        Self {
            token: overrides.token.clone().or(file.token),
            default_database_id: overrides
                .default_database_id
                .clone()
                .or(file.default_database_id),
            api_version: overrides
                .api_version
                .clone()
                .or(file.api_version)
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            base_url: overrides
                .base_url
                .clone()
                .or(file.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            default_status: file
                .default_status
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            properties: file.properties,
            config_path: path,
        }
    }

    /// Returns the user config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "notion-cli", "notion-cli")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the default config file location
    pub fn default_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the token, or an error naming where to put it
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        self.token.as_deref().filter(|t| !t.is_empty()).ok_or_else(|| {
            let location = self
                .config_path
                .clone()
                .or_else(Self::default_config_path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "config.toml".to_string());
            ConfigError::MissingToken(location)
        })
    }

    /// Picks the explicit database ID or falls back to the configured default
    pub fn database_id(&self, explicit: Option<&str>) -> Result<PageId, ConfigError> {
        explicit
            .or(self.default_database_id.as_deref())
            .map(PageId::parse)
            .ok_or(ConfigError::MissingDatabase)
    }

    /// Token with everything but the last four characters hidden
    pub fn masked_token(&self) -> Option<String> {
        self.token.as_deref().map(|token| {
            let chars: Vec<char> = token.chars().collect();
            let visible = chars.len().min(4);
            let tail: String = chars[chars.len() - visible..].iter().collect();
            format!("{}{}", "*".repeat(chars.len() - visible), tail)
        })
    }
}
