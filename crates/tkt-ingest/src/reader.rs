//! CSV reading into header-keyed records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use tkt_model::RawRecord;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

/// Reads a CSV file with a header row into one [`RawRecord`] per data row.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let file = File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    read_records_from(file, path)
}

/// Reads CSV content from any reader. `path` is only used for error context.
///
/// Rows shorter than the header simply lack the trailing fields; extra
/// cells beyond the header are ignored. A row of blank cells is kept so
/// validation can reject it; only empty lines are dropped by the parser.
pub fn read_records_from<R: Read>(reader: R, path: &Path) -> Result<Vec<RawRecord>> {
    let csv_error = |source: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        records.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.clone(), normalize_cell(value)))
                .collect::<RawRecord>(),
        );
    }
    debug!(path = %path.display(), rows = records.len(), "read csv records");
    Ok(records)
}
