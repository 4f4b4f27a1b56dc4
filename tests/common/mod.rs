//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use adoption_metrics::{ProcedureRecord, RecordSet};
use chrono::NaiveDate;
use tempfile::TempDir;

/// Header used by the fixture CSV files
pub const HEADER: &str = "procedure_date,physician_id,geographic_region,specialty,revenue_impact";

/// Build a date, panicking on invalid input
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build a record on the given date
pub fn record(
    physician: &str,
    (y, m, d): (i32, u32, u32),
    region: &str,
    specialty: &str,
    revenue: f64,
) -> ProcedureRecord {
    ProcedureRecord::new(date(y, m, d), physician, region, specialty, revenue)
}

/// A small multi-region dataset
///
/// * P1 (West, Cardiology) adopts 2023-01, repeats in 2023-02
/// * P2 (West, Urology) adopts 2023-02
/// * P3 (East, Cardiology) adopts 2023-02
/// * P4 (East, Cardiology) adopts 2023-03
pub fn sample_records() -> RecordSet {
    vec![
        record("P1", (2023, 1, 10), "West", "Cardiology", 1000.0),
        record("P1", (2023, 2, 3), "West", "Cardiology", 2000.0),
        record("P2", (2023, 2, 14), "West", "Urology", 4000.0),
        record("P3", (2023, 2, 20), "East", "Cardiology", 1500.0),
        record("P4", (2023, 3, 1), "East", "Cardiology", 500.0),
    ]
    .into_iter()
    .collect()
}

/// Write `contents` to a CSV file inside a fresh temporary directory
///
/// The directory is removed when the returned guard is dropped.
pub fn write_csv(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("device_adoption_data.csv");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Header plus the given data lines
pub fn csv_with_rows(rows: &[&str]) -> String {
    let mut contents = String::from(HEADER);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    contents
}
