//! Error types for reading and writing tables.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run while loading input or writing output.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Input Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read a file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    // === Output Errors ===
    /// Nothing to write; an output table needs at least one row.
    #[error("no data to write to {path}")]
    NoRows { path: PathBuf },

    /// Failed to create or write an output file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode a CSV row.
    #[error("failed to write CSV {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to encode a JSON document.
    #[error("failed to write JSON {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/orders.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/orders.csv");

        let err = IngestError::NoRows {
            path: PathBuf::from("out.csv"),
        };
        assert_eq!(err.to_string(), "no data to write to out.csv");
    }
}
