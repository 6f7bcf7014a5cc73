//! PriceRecord: one row of the daily time series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV record for a single trading day.
///
/// Prices are taken as loaded. Nothing rejects a record whose OHLC relations
/// are inconsistent; derived metrics are computed on whatever values are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PriceRecord {
    /// Returns true if any price field is NaN.
    pub fn is_void(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// OHLC sanity: high >= low and close lies inside [low, high], prices positive.
    pub fn is_consistent(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.close <= self.high
            && self.close >= self.low
            && self.open > 0.0
            && self.close > 0.0
    }
}
