//! CSV sample loader

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use crate::domain::value_objects::Record;
use crate::error::{LyticsError, LyticsResult};

/// Data rows kept from a CSV sample file
pub const DEFAULT_CSV_ROWS: usize = 5;

/// Load up to `max_rows` data rows of a CSV file with a header row
///
/// Each row is zipped against the header names. Trailing empty fields are kept
/// as empty values. Rows whose column count differs from the header are
/// dropped with a warning and do not count towards `max_rows`.
pub fn load_csv(path: &Path, max_rows: usize) -> LyticsResult<Vec<Record>> {
    let file = File::open(path).map_err(|source| LyticsError::ReadFile {
        file: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LyticsError::InvalidCsv {
            file: path.to_path_buf(),
            message: format!("could not read headers: {}", e),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(LyticsError::InvalidCsv {
            file: path.to_path_buf(),
            message: "missing header row".to_string(),
        });
    }

    let mut records = Vec::with_capacity(max_rows);
    for row in reader.records() {
        if records.len() >= max_rows {
            break;
        }

        let row = row.map_err(|e| LyticsError::InvalidCsv {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if row.len() != headers.len() {
            tracing::warn!(
                file = %path.display(),
                line = row.position().map(|p| p.line()).unwrap_or_default(),
                "headers/cols dont match, dropping row: expected {} got {}",
                headers.len(),
                row.len()
            );
            continue;
        }

        let mut record = Record::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            record.set(header.as_str(), value);
        }
        records.push(record);
    }

    Ok(records)
}
