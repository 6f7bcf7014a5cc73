//! Derived metrics over a filtered window.
//!
//! Every series metric is a pure function: records in, one value per record
//! out. Leading values inside the warmup (`lookback()`) are `None`, as is any
//! value whose computation hits a non-finite number, so a chart shows a gap
//! rather than a spike to infinity.

pub mod daily_return;
pub mod moving_average;
pub mod summary;
pub mod volatility;

pub use daily_return::{daily_return_percent, DailyReturn};
pub use moving_average::{moving_average, MovingAverage};
pub use summary::{round_to, summary, Summary};
pub use volatility::{rolling_sample_std, volatility, Volatility};

use crate::domain::PriceRecord;

/// Trailing window of the moving-average overlay.
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 20;

/// Trailing window of the return volatility.
pub const DEFAULT_VOLATILITY_WINDOW: usize = 20;

/// A series derived from price records.
///
/// `compute` returns a vector of the same length as its input. No value at
/// index t may depend on records after t.
pub trait DerivedSeries: Send + Sync {
    /// Column label (e.g., "ma_20").
    fn name(&self) -> &str;

    /// Number of leading records that never carry a value.
    fn lookback(&self) -> usize;

    fn compute(&self, records: &[PriceRecord]) -> Vec<Option<f64>>;
}

pub(crate) fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
