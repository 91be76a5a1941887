//! Domain Services
//!
//! Stateless operations on domain values.

pub mod flatten;

pub use flatten::flatten;
