//! Terminal output for the `lytics` binary
//!
//! Views render events to plain strings; the command decides where they go.

pub mod blocks;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
