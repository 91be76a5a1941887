//! Error types for the Lytics CLI
//!
//! Library code returns `LyticsResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Lytics operations
pub type LyticsResult<T> = Result<T, LyticsError>;

/// Main error type for Lytics operations
#[derive(Error, Debug)]
pub enum LyticsError {
    /// A sample or query file could not be read
    #[error("could not read {file}: {source}")]
    ReadFile {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Sample JSON is not an object or an array of objects
    #[error("invalid json file {file}: {message}")]
    InvalidJson { file: PathBuf, message: String },

    /// Sample CSV could not be parsed (header or row level)
    #[error("could not read csv {file}: {message}")]
    InvalidCsv { file: PathBuf, message: String },

    /// A JSON value could not be projected to a flat record
    #[error("could not flatten record: {message}")]
    Flatten { message: String },

    /// Remote API answered with a non-success status
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Remote API could not be reached or answered with garbage
    #[error("api transport error: {0}")]
    Transport(String),

    /// No API key configured
    #[error("no api key configured - pass --key or set LIOKEY")]
    MissingApiKey,

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Watch root is missing or not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// File system notification setup failed
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// Notification channel closed while the watch loop was running
    #[error("file notification channel closed unexpectedly")]
    WatchChannelClosed,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_invalid_csv() {
        let err = LyticsError::InvalidCsv {
            file: PathBuf::from("orders.csv"),
            message: "missing header row".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "could not read csv orders.csv: missing header row"
        );
    }

    #[test]
    fn test_error_display_api() {
        let err = LyticsError::Api {
            status: 400,
            message: "invalid query".to_string(),
        };
        assert_eq!(err.to_string(), "api error (400): invalid query");
    }

    #[test]
    fn test_error_display_missing_key() {
        assert!(LyticsError::MissingApiKey.to_string().contains("LIOKEY"));
    }
}
