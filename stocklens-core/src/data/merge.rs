//! Concatenate sources into one chronological series.

use chrono::NaiveDate;

use crate::domain::PriceRecord;

/// Concatenate `sources` in order and sort ascending by date.
///
/// The sort is stable: rows sharing a date keep source order, then file
/// order. Rows that share a date are all retained.
pub fn merge_sources(sources: Vec<Vec<PriceRecord>>) -> Vec<PriceRecord> {
    let mut merged: Vec<PriceRecord> = sources.into_iter().flatten().collect();
    merged.sort_by_key(|r| r.date);
    merged
}

/// Count records whose date equals the preceding record's date.
///
/// `records` must be sorted by date.
pub fn duplicate_dates(records: &[PriceRecord]) -> usize {
    records
        .windows(2)
        .filter(|pair| pair[0].date == pair[1].date)
        .count()
}

/// Count records whose OHLC relations do not hold (see [`PriceRecord::is_consistent`]).
pub fn inconsistent_records(records: &[PriceRecord]) -> usize {
    records.iter().filter(|r| !r.is_consistent()).count()
}

/// First and last date of a sorted series.
pub fn date_span(records: &[PriceRecord]) -> Option<(NaiveDate, NaiveDate)> {
    match (records.first(), records.last()) {
        (Some(first), Some(last)) => Some((first.date, last.date)),
        _ => None,
    }
}
