//! Property tests for CSV sample loading.

use proptest::prelude::*;
use tempfile::tempdir;

use lytics::infrastructure::samples::load_csv;

fn table() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
    proptest::collection::btree_set("[a-z]{1,8}", 1..6).prop_flat_map(|headers| {
        let headers: Vec<String> = headers.into_iter().collect();
        let width = headers.len();
        let row = proptest::collection::vec("[A-Za-z0-9 ,\"]{1,8}", width);
        (Just(headers), proptest::collection::vec(row, 0..10))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every loaded record holds its row's cells in header order,
    /// and at most `max_rows` rows are kept.
    #[test]
    fn property_csv_rows_zip_with_header(
        (headers, rows) in table(),
        max_rows in 1usize..8,
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("orders.csv");

        let mut writer = csv::Writer::from_path(&path).unwrap();
        writer.write_record(&headers).unwrap();
        for row in &rows {
            writer.write_record(row).unwrap();
        }
        writer.flush().unwrap();
        drop(writer);

        let records = load_csv(&path, max_rows).unwrap();
        prop_assert_eq!(records.len(), rows.len().min(max_rows));

        for (record, row) in records.iter().zip(&rows) {
            let expected: Vec<(&str, &str)> = headers
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(String::as_str))
                .collect();
            let actual: Vec<(&str, &str)> = record.iter().collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
