//! Column schema for price CSV files.
//!
//! Header names are matched case-insensitively after trimming, so the
//! `Date,Open,High,Low,Close,Volume` layout produced by most data vendors
//! loads the same as an all-lowercase file. Extra columns are ignored.

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

/// Columns every source file must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = ["date", "open", "high", "low", "close", "volume"];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Expected schema for price data.
pub struct RecordSchema;

impl RecordSchema {
    /// Lowercase and trim every header so serde field names line up.
    pub fn normalize_headers(headers: &StringRecord) -> StringRecord {
        headers
            .iter()
            .map(|h| h.trim().to_ascii_lowercase())
            .collect()
    }

    /// First required column missing from `headers`, if any.
    ///
    /// `headers` must already be normalized.
    pub fn missing_column(headers: &StringRecord) -> Option<&'static str> {
        REQUIRED_COLUMNS
            .iter()
            .copied()
            .find(|required| !headers.iter().any(|h| h == *required))
    }
}

/// Parse a calendar date in any of the accepted layouts.
///
/// Timestamps are truncated to their date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse a share count. Accepts integral floats such as `1000.0`.
pub fn parse_volume(value: &str) -> Option<u64> {
    let value = value.trim();
    if let Ok(v) = value.parse::<u64>() {
        return Some(v);
    }
    let v = value.parse::<f64>().ok()?;
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 {
        Some(v as u64)
    } else {
        None
    }
}
