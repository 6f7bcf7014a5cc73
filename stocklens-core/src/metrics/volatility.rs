//! Rolling sample standard deviation of daily percent returns.
//!
//! The return series starts at index 1, so with a window of 20 the first
//! volatility value lands at index 20.

use super::{finite, DailyReturn, DerivedSeries};
use crate::domain::PriceRecord;

#[derive(Debug, Clone)]
pub struct Volatility {
    window: usize,
    name: String,
}

impl Volatility {
    /// # Panics
    ///
    /// Panics if `window` is less than 2.
    pub fn new(window: usize) -> Self {
        assert!(window >= 2, "volatility window must be >= 2");
        Self {
            window,
            name: format!("volatility_{window}"),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl DerivedSeries for Volatility {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window
    }

    fn compute(&self, records: &[PriceRecord]) -> Vec<Option<f64>> {
        rolling_sample_std(&DailyReturn.compute(records), self.window)
    }
}

/// Rolling sample standard deviation of daily percent returns.
///
/// # Panics
///
/// Panics if `window` is less than 2; a sample deviation needs two values.
pub fn volatility(records: &[PriceRecord], window: usize) -> Vec<Option<f64>> {
    Volatility::new(window).compute(records)
}

/// Sample (n - 1) standard deviation over each trailing `window`.
///
/// A window containing an absent value yields `None`.
pub fn rolling_sample_std(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];
    if window < 2 {
        return result;
    }
    for (start, slice) in values.windows(window).enumerate() {
        let Some(present) = slice.iter().copied().collect::<Option<Vec<f64>>>() else {
            continue;
        };
        let n = present.len() as f64;
        let mean = present.iter().sum::<f64>() / n;
        let ss: f64 = present.iter().map(|v| (v - mean).powi(2)).sum();
        result[start + window - 1] = finite((ss / (n - 1.0)).sqrt());
    }
    result
}
