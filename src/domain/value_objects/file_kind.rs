//! File classification for the watch loop
//!
//! Every watched path maps to a logical base name and a [`FileKind`].
//! Names are case-insensitive: `Orders.JSON` and `orders.lql` belong together.

use std::path::Path;

/// Kind of file, derived from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `.lql` query definition
    Lql,
    /// `.json` sample data (object or array of objects)
    Json,
    /// `.csv` sample data with a header row
    Csv,
    /// Anything else; ignored by the watch loop
    Unrecognized,
}

impl FileKind {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "lql" => FileKind::Lql,
            "json" => FileKind::Json,
            "csv" => FileKind::Csv,
            _ => FileKind::Unrecognized,
        }
    }
}

/// A watched file name split into logical name and kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName {
    /// Lowercased text before the first `.`
    pub name: String,
    pub kind: FileKind,
}

impl FileName {
    /// Classify the final component of `path`
    ///
    /// Returns `None` when there is no `.` or the name starts with one.
    pub fn parse(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let lower = file_name.to_lowercase();
        let dot = lower.find('.')?;
        if dot == 0 {
            return None;
        }
        let ext = lower.rsplit('.').next().unwrap_or_default();
        Some(Self {
            name: lower[..dot].to_string(),
            kind: FileKind::from_extension(ext),
        })
    }

    /// True when `other` names a `kind` file of the same logical name
    pub fn is_sibling(&self, other: &FileName, kind: FileKind) -> bool {
        other.kind == kind && other.name == self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_extensions() {
        let f = FileName::parse(Path::new("orders.lql")).unwrap();
        assert_eq!(f.name, "orders");
        assert_eq!(f.kind, FileKind::Lql);

        assert_eq!(
            FileName::parse(Path::new("orders.csv")).unwrap().kind,
            FileKind::Csv
        );
        assert_eq!(
            FileName::parse(Path::new("orders.json")).unwrap().kind,
            FileKind::Json
        );
    }

    #[test]
    fn name_is_lowercased_and_cut_at_first_dot() {
        let f = FileName::parse(Path::new("Users.Backup.JSON")).unwrap();
        assert_eq!(f.name, "users");
        assert_eq!(f.kind, FileKind::Json);
    }

    #[test]
    fn uses_final_path_component() {
        let f = FileName::parse(Path::new("/tmp/work/Orders.csv")).unwrap();
        assert_eq!(f.name, "orders");
    }

    #[test]
    fn rejects_names_without_extension_or_dot_files() {
        assert!(FileName::parse(Path::new("Makefile")).is_none());
        assert!(FileName::parse(Path::new(".hidden")).is_none());
        assert!(FileName::parse(Path::new(".lytics.toml")).is_none());
    }

    #[test]
    fn other_extensions_are_unrecognized() {
        let f = FileName::parse(Path::new("notes.txt")).unwrap();
        assert_eq!(f.kind, FileKind::Unrecognized);
    }

    #[test]
    fn siblings_match_regardless_of_case() {
        let query = FileName::parse(Path::new("Orders.lql")).unwrap();
        let sample = FileName::parse(Path::new("ORDERS.Json")).unwrap();
        assert!(query.is_sibling(&sample, FileKind::Json));
        assert!(!query.is_sibling(&sample, FileKind::Csv));

        let other = FileName::parse(Path::new("users.json")).unwrap();
        assert!(!query.is_sibling(&other, FileKind::Json));
    }
}
