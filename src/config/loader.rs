//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LyticsError, LyticsResult};

use super::types::{Config, OutputFormat};

/// Project config file, looked up in the watched directory
pub const PROJECT_CONFIG_FILE: &str = ".lytics.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LyticsResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| LyticsError::ReadFile {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LyticsError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from user config and project config over defaults
///
/// Both files are merged key by key, the project file winning; a user
/// `api.key` survives a project file that only tunes `[preview]`.
/// Environment overrides apply on top.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let user = dirs::config_dir().map(|dir| dir.join("lytics").join("config.toml"));
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));

    let layers: Vec<PathBuf> = user.into_iter().chain(project).collect();
    with_env_overrides(load_layers(&layers))
}

/// Merge config files in priority order, lowest first
///
/// Missing files are skipped. A file that fails to parse is logged and
/// skipped without discarding the other layers.
pub fn load_layers(paths: &[PathBuf]) -> Config {
    let mut merged = toml::Table::new();
    for path in paths {
        if !path.exists() {
            continue;
        }
        match read_layer(path) {
            Ok((table, warnings)) => {
                for warning in &warnings {
                    log_warning(warning);
                }
                merge_tables(&mut merged, table);
            }
            Err(e) => tracing::warn!("ignoring config: {}", e),
        }
    }

    toml::Value::Table(merged)
        .try_into()
        .unwrap_or_else(|e| {
            tracing::warn!("ignoring merged config: {}", e);
            Config::default()
        })
}

fn read_layer(path: &Path) -> LyticsResult<(toml::Table, Vec<ConfigWarning>)> {
    let (_, warnings) = load_with_warnings(path)?;
    let content = fs::read_to_string(path).map_err(|source| LyticsError::ReadFile {
        file: path.to_path_buf(),
        source,
    })?;
    let table = content
        .parse::<toml::Table>()
        .map_err(|e| LyticsError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok((table, warnings))
}

/// Overlay `overlay` onto `base`; nested tables merge, other values replace
pub(crate) fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(incoming) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, incoming);
                continue;
            }
            base.insert(key, toml::Value::Table(incoming));
        } else {
            base.insert(key, value);
        }
    }
}

/// Apply environment variable overrides
pub fn with_env_overrides(mut config: Config) -> Config {
    // LIOKEY
    if let Ok(key) = std::env::var("LIOKEY") {
        if !key.trim().is_empty() {
            config.api.key = Some(key.trim().to_string());
        }
    }

    // LYTICS_API_URL
    if let Ok(url) = std::env::var("LYTICS_API_URL") {
        if !url.trim().is_empty() {
            config.api.url = url.trim().to_string();
        }
    }

    // LYTICSFORMAT
    if let Ok(format) = std::env::var("LYTICSFORMAT") {
        match format.to_lowercase().as_str() {
            "json" => config.output.format = OutputFormat::Json,
            "text" => config.output.format = OutputFormat::Text,
            _ => {}
        }
    }

    config
}

fn log_warning(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => tracing::warn!(
            "unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key,
            location,
            suggestion
        ),
        None => tracing::warn!("unknown config key '{}' in {}", warning.key, location),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "api",
        "url",
        "key",
        "output",
        "color",
        "unicode",
        "format",
        "preview",
        "csv_rows",
        "evaluate_limit",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
