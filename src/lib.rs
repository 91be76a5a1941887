//! Lytics - developer tooling for the Lytics CDP
//!
//! `lytics watch` keeps a directory of query (`.lql`) and sample (`.json`,
//! `.csv`) files under observation and previews the entities each query would
//! produce whenever one of them changes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::watch::{WatchEvent, WatchOptions, WatchUseCase};
pub use config::{Config, OutputFormat};
pub use domain::entities::LogicalFile;
pub use domain::ports::QueryService;
pub use domain::services::flatten;
pub use domain::value_objects::{FileKind, FileName, Record};
pub use error::{LyticsError, LyticsResult};
pub use infrastructure::api::LyticsClient;
