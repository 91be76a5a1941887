//! Configuration module for Lytics
//!
//! Configuration hierarchy, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (`LIOKEY`, `LYTICS_API_URL`, `LYTICSFORMAT`)
//! 3. Project config (`<watched dir>/.lytics.toml`)
//! 4. User config (`~/.config/lytics/config.toml`)
//! 5. Built-in defaults
//!
//! The two files merge key by key: a project file that only sets
//! `[preview]` still picks up `api.key` from the user file.

mod loader;
mod types;

pub use loader::{load_layers, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ApiConfig, ColorMode, Config, OutputConfig, OutputFormat, PreviewConfig};
