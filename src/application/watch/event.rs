//! Watch event types and options

use std::path::PathBuf;

use serde::Serialize;

use crate::infrastructure::samples::DEFAULT_CSV_ROWS;

/// Samples evaluated per preview
pub const DEFAULT_EVALUATE_LIMIT: usize = 2;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Directory holding `.lql`, `.json` and `.csv` files (watched non-recursively)
    pub root: PathBuf,
    /// Data rows kept from a CSV sample file
    pub csv_rows: usize,
    /// Samples evaluated per preview
    pub evaluate_limit: usize,
}

impl WatchOptions {
    /// Create new watch options with default preview caps
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            csv_rows: DEFAULT_CSV_ROWS,
            evaluate_limit: DEFAULT_EVALUATE_LIMIT,
        }
    }

    pub fn with_csv_rows(mut self, csv_rows: usize) -> Self {
        self.csv_rows = csv_rows;
        self
    }

    pub fn with_evaluate_limit(mut self, evaluate_limit: usize) -> Self {
        self.evaluate_limit = evaluate_limit;
        self
    }
}

/// How a preview is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Against the query from the matching `.lql` file
    Query,
    /// Against the queries already deployed to the account
    DeployedQueries,
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Initial scan done, watching for changes
    WatchStarted { root: String, files: usize },
    /// A watched file was written or created
    FileChanged { path: String },
    /// Query validated; `stream` is the source stream when one was reported
    QueryValidated { name: String, stream: Option<String> },
    /// Query rejected by the API
    QueryInvalid { name: String, message: String },
    /// Recent events of a stream were adopted as samples
    RecentSamples {
        name: String,
        stream: String,
        count: usize,
    },
    /// Nothing to evaluate
    NoData { name: String },
    /// Evaluation of a LogicalFile begins
    EvaluationStarted { name: String, mode: EvaluationMode },
    /// One sample evaluated
    EntityEvaluated {
        name: String,
        entity: serde_json::Value,
    },
    /// One sample failed to evaluate
    EvaluationFailed {
        name: String,
        message: String,
        record: String,
    },
    /// Error occurred
    Error { message: String },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
