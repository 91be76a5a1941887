//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `WatchUseCase` - Previews query files against sample data as they change

pub mod watch;

pub use watch::{
    EvaluationMode, Evaluator, FileRegistry, PendingChanges, WatchEvent, WatchOptions,
    WatchUseCase, DEBOUNCE_MS, DEFAULT_EVALUATE_LIMIT,
};
