//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `api/` - Lytics HTTP API client (implements `QueryService`)
//! - `samples/` - JSON and CSV sample file loaders

pub mod api;
pub mod samples;

// Re-export for convenience
pub use api::{LyticsClient, DEFAULT_API_URL};
pub use samples::{load_csv, load_json, DEFAULT_CSV_ROWS};
