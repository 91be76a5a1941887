//! JSON sample loader

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::domain::services::flatten;
use crate::domain::value_objects::Record;
use crate::error::{LyticsError, LyticsResult};

/// Load a JSON object or array of objects as flat records
///
/// A single object is treated as a one-element array. Elements that cannot be
/// flattened are dropped with a warning; the rest keep their order.
pub fn load_json(path: &Path) -> LyticsResult<Vec<Record>> {
    let content = fs::read(path).map_err(|source| LyticsError::ReadFile {
        file: path.to_path_buf(),
        source,
    })?;

    let value: Value =
        serde_json::from_slice(&content).map_err(|e| LyticsError::InvalidJson {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let rows = match value {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => {
            return Err(LyticsError::InvalidJson {
                file: path.to_path_buf(),
                message: "expected an object or an array of objects".to_string(),
            })
        }
    };

    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        match flatten(row) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(file = %path.display(), row = idx, "could not convert row to record: {}", e);
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn single_object_becomes_one_record() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "user.json", r#"{"id": "1", "name": "a"}"#);

        let records = load_json(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].encode(), "id=1&name=a");
    }

    #[test]
    fn array_keeps_order() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "user.json",
            "\n  [{\"id\": \"1\"}, {\"id\": \"2\"}, {\"id\": \"3\"}]\n",
        );

        let records = load_json(&path).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.get("id").unwrap()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn unflattenable_rows_are_dropped() {
        let dir = tempdir().unwrap();
        let path = write(
            dir.path(),
            "user.json",
            r#"[{"id": "1"}, 42, {"id": "2"}, "text", {"id": "3"}]"#,
        );

        let records = load_json(&path).unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.get("id").unwrap()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "user.json", r#"{"id": "#);

        let err = load_json(&path).unwrap_err();
        assert!(matches!(err, LyticsError::InvalidJson { .. }));
    }

    #[test]
    fn scalar_document_is_an_error() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "user.json", "17");

        assert!(matches!(
            load_json(&path),
            Err(LyticsError::InvalidJson { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LyticsError::ReadFile { .. }));
    }
}
