//! CSV ingestion: one source file into an ordered list of [`PriceRecord`]s.
//!
//! Any failure here is fatal for the dashboard; there is no partial load.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::schema::{parse_date, parse_volume, RecordSchema};
use crate::domain::PriceRecord;

/// Errors raised while loading a source file.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{} line {line}: cannot parse date '{value}'", .path.display())]
    InvalidDate {
        path: PathBuf,
        line: u64,
        value: String,
    },

    #[error("{} line {line}: volume '{value}' is not a non-negative integer", .path.display())]
    InvalidVolume {
        path: PathBuf,
        line: u64,
        value: String,
    },
}

/// Row shape after header normalization. Unknown columns are skipped by serde.
#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: String,
}

/// Load every row of a CSV file, in file order.
pub fn load_csv(path: &Path) -> Result<Vec<PriceRecord>, DataError> {
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_records(file, path)?;
    tracing::debug!(path = %path.display(), rows = records.len(), "read price csv");
    Ok(records)
}

/// Parse CSV rows from any reader. `origin` only labels errors.
pub fn read_records<R: Read>(input: R, origin: &Path) -> Result<Vec<PriceRecord>, DataError> {
    let csv_err = |source| DataError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = RecordSchema::normalize_headers(reader.headers().map_err(csv_err)?);
    if let Some(column) = RecordSchema::missing_column(&headers) {
        return Err(DataError::MissingColumn {
            path: origin.to_path_buf(),
            column,
        });
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawRow = row.deserialize(Some(&headers)).map_err(csv_err)?;

        let date = parse_date(&raw.date).ok_or_else(|| DataError::InvalidDate {
            path: origin.to_path_buf(),
            line,
            value: raw.date.clone(),
        })?;
        let volume = parse_volume(&raw.volume).ok_or_else(|| DataError::InvalidVolume {
            path: origin.to_path_buf(),
            line,
            value: raw.volume.clone(),
        })?;

        records.push(PriceRecord {
            date,
            open: raw.open,
            high: raw.high,
            low: raw.low,
            close: raw.close,
            volume,
        });
    }

    Ok(records)
}
