//! Simple moving average of close prices.
//!
//! First value at index window-1.

use super::{finite, DerivedSeries};
use crate::domain::PriceRecord;

#[derive(Debug, Clone)]
pub struct MovingAverage {
    window: usize,
    name: String,
}

impl MovingAverage {
    /// # Panics
    ///
    /// Panics if `window` is zero.
    pub fn new(window: usize) -> Self {
        assert!(window >= 1, "moving average window must be >= 1");
        Self {
            window,
            name: format!("ma_{window}"),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl DerivedSeries for MovingAverage {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window - 1
    }

    fn compute(&self, records: &[PriceRecord]) -> Vec<Option<f64>> {
        let mut result = vec![None; records.len()];
        for (start, slice) in records.windows(self.window).enumerate() {
            let sum: f64 = slice.iter().map(|r| r.close).sum();
            result[start + self.window - 1] = finite(sum / self.window as f64);
        }
        result
    }
}

/// Trailing mean of `close` over `window` records.
///
/// # Panics
///
/// Panics if `window` is zero. [`MetricsConfig::validate`](crate::config::MetricsConfig::validate)
/// rejects such windows before the pipeline gets here.
pub fn moving_average(records: &[PriceRecord], window: usize) -> Vec<Option<f64>> {
    MovingAverage::new(window).compute(records)
}
