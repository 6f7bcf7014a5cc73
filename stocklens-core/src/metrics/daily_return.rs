//! Daily percent return of close prices.
//!
//! return[i] = (close[i] - close[i-1]) / close[i-1] * 100, absent at index 0.

use super::{finite, DerivedSeries};
use crate::domain::PriceRecord;

#[derive(Debug, Clone, Copy, Default)]
pub struct DailyReturn;

impl DerivedSeries for DailyReturn {
    fn name(&self) -> &str {
        "daily_return_pct"
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, records: &[PriceRecord]) -> Vec<Option<f64>> {
        let mut result = Vec::with_capacity(records.len());
        if records.is_empty() {
            return result;
        }
        result.push(None);
        result.extend(records.windows(2).map(|pair| {
            let prev = pair[0].close;
            finite((pair[1].close - prev) / prev * 100.0)
        }));
        result
    }
}

pub fn daily_return_percent(records: &[PriceRecord]) -> Vec<Option<f64>> {
    DailyReturn.compute(records)
}
