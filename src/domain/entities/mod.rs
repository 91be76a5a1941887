//! Domain Entities
//!
//! - `LogicalFile` - query text and samples sharing one base name

mod logical_file;

pub use logical_file::LogicalFile;
