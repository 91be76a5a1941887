//! LogicalFile entity - the state bundle for one base name
//!
//! `orders.lql`, `orders.json` and `orders.csv` all feed the same
//! `LogicalFile` named `orders`. It pairs the query text with the sample
//! records the query is previewed against.

use crate::domain::value_objects::Record;

/// Query text, resolved stream and sample records for one base name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogicalFile {
    name: String,
    query: String,
    stream: String,
    samples: Vec<Record>,
    recent_checked: bool,
}

impl LogicalFile {
    /// Create an empty LogicalFile for a (lowercased) base name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Query text; empty until a `.lql` file is seen
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Stream the query reads from; empty until validation reports one
    pub fn stream(&self) -> &str {
        &self.stream
    }

    pub fn set_stream(&mut self, stream: impl Into<String>) {
        self.stream = stream.into();
    }

    pub fn samples(&self) -> &[Record] {
        &self.samples
    }

    /// Replace the samples wholesale
    pub fn replace_samples(&mut self, samples: Vec<Record>) {
        self.samples = samples;
    }

    pub fn recent_checked(&self) -> bool {
        self.recent_checked
    }

    pub fn mark_recent_checked(&mut self) {
        self.recent_checked = true;
    }

    /// Whether a remote stream with `stream_name` supplies samples for this file
    pub fn matches_stream(&self, stream_name: &str) -> bool {
        stream_name == self.name || (!self.stream.is_empty() && stream_name == self.stream)
    }
}
