//! Debouncing of file notifications
//!
//! One save usually arrives as a burst (create, truncate, write, rename).
//! Paths are collected until no new notification has arrived for
//! [`DEBOUNCE_MS`], then handled once each, in arrival order.

use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Quiet period before a burst of notifications is handled
pub const DEBOUNCE_MS: u64 = 100;

#[derive(Debug, Default)]
pub struct PendingChanges {
    paths: Vec<PathBuf>,
    last_change: Option<Instant>,
}

impl PendingChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_change(&mut self, path: PathBuf) {
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
        self.last_change = Some(Instant::now());
    }

    /// True once the burst has gone quiet
    pub fn is_ready(&self) -> bool {
        match self.last_change {
            Some(last) => {
                !self.paths.is_empty() && last.elapsed() >= Duration::from_millis(DEBOUNCE_MS)
            }
            None => false,
        }
    }

    pub fn take_changes(&mut self) -> Vec<PathBuf> {
        self.last_change = None;
        std::mem::take(&mut self.paths)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
