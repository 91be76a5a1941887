//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::watch::DEFAULT_EVALUATE_LIMIT;
use crate::error::LyticsResult;
use crate::infrastructure::api::DEFAULT_API_URL;
use crate::infrastructure::samples::DEFAULT_CSV_ROWS;

use super::loader::{self, ConfigWarning};

/// Remote API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,

    /// API key sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            key: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
            format: OutputFormat::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Event output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human readable, timestamped
    #[default]
    Text,
    /// One JSON event per line
    Json,
}

/// Preview limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Data rows kept from a CSV sample file
    #[serde(default = "default_csv_rows")]
    pub csv_rows: usize,

    /// Samples evaluated per preview
    #[serde(default = "default_evaluate_limit")]
    pub evaluate_limit: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            csv_rows: default_csv_rows(),
            evaluate_limit: default_evaluate_limit(),
        }
    }
}

fn default_csv_rows() -> usize {
    DEFAULT_CSV_ROWS
}

fn default_evaluate_limit() -> usize {
    DEFAULT_EVALUATE_LIMIT
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub preview: PreviewConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LyticsResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LyticsResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load user config with project config merged over it, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (`LIOKEY`, `LYTICS_API_URL`, `LYTICSFORMAT`)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Configured API key, if any non-blank one is set
    pub fn api_key(&self) -> Option<&str> {
        self.api
            .key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
