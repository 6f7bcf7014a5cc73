//! Test helpers for building dashboards over synthetic prices.

use chrono::{Duration, NaiveDate};

use stocklens_core::config::DisplayConfig;
use stocklens_core::{PriceRecord, TimeSeriesPipeline};

use crate::app::AppState;

pub fn make_records(n: usize) -> Vec<PriceRecord> {
    let base = NaiveDate::from_ymd_opt(2020, 3, 2).unwrap();
    (0..n)
        .map(|i| {
            let close = 250.0 + (i as f64 * 0.3).sin() * 12.0;
            PriceRecord {
                date: base + Duration::days(i as i64),
                open: close - 0.5,
                high: close + 2.0,
                low: close - 2.0,
                close,
                volume: 2_000_000 + (i as u64 * 1_000),
            }
        })
        .collect()
}

pub fn make_pipeline(n: usize) -> TimeSeriesPipeline {
    TimeSeriesPipeline::from_sources(vec![make_records(n)])
}

/// Dashboard over `n` consecutive days, full span, both panels on.
pub fn make_app(n: usize) -> AppState {
    let pipeline = make_pipeline(n);
    let view = pipeline.default_view();
    AppState::new(pipeline, DisplayConfig::default(), view)
}
