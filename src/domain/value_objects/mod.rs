//! Value Objects
//!
//! Immutable value types with validation and behavior.

mod file_kind;
mod record;

pub use file_kind::{FileKind, FileName};
pub use record::Record;
