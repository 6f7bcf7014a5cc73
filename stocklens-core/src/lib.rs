//! StockLens Core: price records, CSV loading, date-window filtering, derived metrics.
//!
//! This crate holds everything below the screen:
//! - Domain type [`PriceRecord`] (one OHLCV day)
//! - CSV ingestion and the merge of two sources into one chronological series
//! - [`TimeSeriesPipeline`]: inclusive date-window filter and `render(view) -> DisplayModel`
//! - Derived series (moving average, daily percent return, rolling volatility) and summary
//! - Dashboard configuration, BLAKE3 fingerprints, profiling scopes

pub mod config;
pub mod data;
pub mod display;
pub mod domain;
pub mod fingerprint;
pub mod metrics;
pub mod pipeline;
pub mod profiling;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{
    ConfigError, ConfigOverrides, DashboardConfig, MetricsConfig, SourcesConfig, ViewConfig,
};
pub use data::DataError;
pub use display::{DisplayModel, EnrichedRow, RiskAnalysis, WindowWarning};
pub use domain::PriceRecord;
pub use metrics::Summary;
pub use pipeline::{filter_window, SourceInfo, TimeSeriesPipeline};
