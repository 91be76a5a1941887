//! Watch Use Case
//!
//! Live query previews for a directory of `.lql`, `.json` and `.csv` files.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Per-name state (`FileRegistry` of `LogicalFile`s)
//! - Remote sample fallback when no local JSON sample exists
//! - Evaluation of samples against the query or the deployed queries
//!
//! ## Architecture
//!
//! - `WatchUseCase` - Main orchestrator
//! - `Evaluator` - Runs samples through the query service
//! - `PendingChanges` - Debounces bursts of notifications for one save
//! - `WatchEvent` - Events emitted during watch operation
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(PathBuf::from("."));
//! let mut use_case = WatchUseCase::new(options, client);
//! use_case.start(running, |event| { ... })?;
//! ```

mod debounce;
mod evaluator;
mod event;
mod registry;
mod use_case;


pub use debounce::{PendingChanges, DEBOUNCE_MS};
pub use evaluator::Evaluator;
pub use event::{EvaluationMode, WatchEvent, WatchOptions, DEFAULT_EVALUATE_LIMIT};
pub use registry::FileRegistry;
pub use use_case::WatchUseCase;
