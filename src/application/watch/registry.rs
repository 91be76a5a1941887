//! File registry - one LogicalFile per case-insensitive base name

use std::collections::HashMap;

use crate::domain::entities::LogicalFile;

/// LogicalFiles keyed by lowercased base name
///
/// Entries are created on first reference and live as long as the registry.
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: HashMap<String, LogicalFile>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the LogicalFile for `name`, creating it when missing
    pub fn get_or_create(&mut self, name: &str) -> &mut LogicalFile {
        let key = name.to_lowercase();
        self.files
            .entry(key)
            .or_insert_with_key(|key| LogicalFile::new(key.clone()))
    }

    pub fn get(&self, name: &str) -> Option<&LogicalFile> {
        self.files.get(&name.to_lowercase())
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.files.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
