//! Utility functions for error handling
//!
//! Opening the dataset is the only place the engine touches the filesystem,
//! so failures are classified here into `DataIssue`s.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{DataIssue, EngineError, Result};

/// Safely open a file, classifying the failure if it cannot be opened
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for log context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        log::debug!("File needed for {purpose} does not exist: {}", path.display());
        return Err(EngineError::data_unavailable(path, DataIssue::NotFound));
    }

    if !path.is_file() {
        log::debug!("Expected a file for {purpose}: {}", path.display());
        return Err(EngineError::data_unavailable(path, DataIssue::NotAFile));
    }

    fs::File::open(path).map_err(|e| {
        // The file can vanish between the existence check and the open
        let issue = match e.kind() {
            io::ErrorKind::NotFound => DataIssue::NotFound,
            _ => DataIssue::Io(e),
        };
        EngineError::data_unavailable(path, issue)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = safe_open_file(Path::new("/definitely/not/here.csv"), "test").unwrap_err();
        assert!(matches!(err.issue(), DataIssue::NotFound));
        assert!(err.user_message().contains("Data file not found"));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = std::env::temp_dir();
        let err = safe_open_file(&dir, "test").unwrap_err();
        assert!(matches!(err.issue(), DataIssue::NotAFile));
    }
}
