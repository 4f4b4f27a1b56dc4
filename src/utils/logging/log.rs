//! Load progress logging
//!
//! One line when a dataset load begins, one when it finishes, and a warning
//! when rows are skipped along the way.

use std::path::Path;
use std::time::Duration;

use crate::models::RecordSet;

/// Log the start of a dataset load
pub fn log_load_start(path: &Path) {
    log::info!("Loading procedure records from {}", path.display());
}

/// Log a finished load with its record count, date coverage and duration
pub fn log_load_complete(path: &Path, records: &RecordSet, elapsed: Duration) {
    match records.date_range() {
        Some((first, last)) => log::info!(
            "Loaded {} records ({first} to {last}) from {} in {elapsed:?}",
            records.len(),
            path.display()
        ),
        None => log::info!("Loaded 0 records from {} in {elapsed:?}", path.display()),
    }
}

/// Warn that rows with unparsable procedure dates were skipped
pub fn log_dropped_rows(path: &Path, dropped: usize, seen: usize) {
    log::warn!(
        "Dropped {dropped} of {seen} rows with unparseable procedure dates: {}",
        path.display()
    );
}
