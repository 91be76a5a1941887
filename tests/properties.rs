//! Property tests for Lytics.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "keeps field order".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/flatten.rs"]
mod flatten;

#[path = "properties/csv_samples.rs"]
mod csv_samples;

#[path = "properties/file_names.rs"]
mod file_names;
