//! Fixtures shared by unit tests.

use chrono::NaiveDate;

use crate::domain::PriceRecord;

pub fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(offset)
}

/// Flat bar: all prices equal to `close`.
pub fn record(date: NaiveDate, close: f64) -> PriceRecord {
    PriceRecord {
        date,
        open: close,
        high: close,
        low: close,
        close,
        volume: 1000,
    }
}

/// Consecutive daily records from close prices.
///
/// open = prev close (or close for the first record), high/low = max/min of
/// open and close widened by 1.0, volume grows by 100 per record.
pub fn make_records(closes: &[f64]) -> Vec<PriceRecord> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PriceRecord {
                date: day(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000 + 100 * i as u64,
            }
        })
        .collect()
}

pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

pub const DEFAULT_EPSILON: f64 = 1e-10;
