//! TimeSeriesPipeline: load, merge, window, derive.
//!
//! The merged series is loaded once and then borrowed by every refresh. A
//! refresh is one call to [`TimeSeriesPipeline::render`]: filter to the
//! view's date window, compute the derived series over that window, and
//! assemble a [`DisplayModel`]. Nothing is cached between refreshes.

use std::path::Path;

use chrono::NaiveDate;

use crate::config::{ConfigError, MetricsConfig, SourcesConfig, ViewConfig};
use crate::data::{
    date_span, duplicate_dates, inconsistent_records, load_csv, merge_sources, DataError,
};
use crate::display::DisplayModel;
use crate::domain::PriceRecord;
use crate::fingerprint::dataset_hash;
use crate::profiling::ProfileScope;

/// Where a block of merged rows came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    pub label: String,
    pub rows: usize,
}

#[derive(Debug, Clone)]
pub struct TimeSeriesPipeline {
    records: Vec<PriceRecord>,
    sources: Vec<SourceInfo>,
    metrics: MetricsConfig,
}

impl TimeSeriesPipeline {
    /// Load both CSV sources and merge them. Any source failure aborts the load.
    pub fn load(sources: &SourcesConfig) -> Result<Self, DataError> {
        let _scope = ProfileScope::new("pipeline.load");
        let pipeline = Self::load_paths(&[sources.training.as_path(), sources.testing.as_path()])?;
        tracing::info!(
            rows = pipeline.len(),
            duplicate_dates = pipeline.duplicate_dates(),
            inconsistent = pipeline.inconsistent_records(),
            "merged price sources"
        );
        Ok(pipeline)
    }

    /// Load any number of CSV files, concatenated in the given order.
    pub fn load_paths(paths: &[&Path]) -> Result<Self, DataError> {
        let mut loaded = Vec::with_capacity(paths.len());
        let mut info = Vec::with_capacity(paths.len());
        for path in paths {
            let records = load_csv(path)?;
            info.push(SourceInfo {
                label: path.display().to_string(),
                rows: records.len(),
            });
            loaded.push(records);
        }
        Ok(Self {
            records: merge_sources(loaded),
            sources: info,
            metrics: MetricsConfig::default(),
        })
    }

    /// Build from records already in memory.
    pub fn from_sources(sources: Vec<Vec<PriceRecord>>) -> Self {
        let info = sources
            .iter()
            .enumerate()
            .map(|(i, records)| SourceInfo {
                label: format!("source {}", i + 1),
                rows: records.len(),
            })
            .collect();
        Self {
            records: merge_sources(sources),
            sources: info,
            metrics: MetricsConfig::default(),
        }
    }

    /// Replace the metric windows. Rejects windows the metrics cannot use.
    pub fn with_metrics(mut self, metrics: MetricsConfig) -> Result<Self, ConfigError> {
        metrics.validate()?;
        self.metrics = metrics;
        Ok(self)
    }

    pub fn metrics(&self) -> &MetricsConfig {
        &self.metrics
    }

    /// The merged series, sorted by date.
    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn sources(&self) -> &[SourceInfo] {
        &self.sources
    }

    /// First and last date of the merged series.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        date_span(&self.records)
    }

    /// Rows that repeat the previous row's date (overlapping sources).
    pub fn duplicate_dates(&self) -> usize {
        duplicate_dates(&self.records)
    }

    /// Rows kept as loaded whose OHLC relations do not hold.
    pub fn inconsistent_records(&self) -> usize {
        inconsistent_records(&self.records)
    }

    /// Default view: the full span with both panels enabled.
    pub fn default_view(&self) -> ViewConfig {
        ViewConfig::full_span(self.span())
    }

    /// Records with `start <= date <= end`.
    pub fn window(&self, start: NaiveDate, end: NaiveDate) -> &[PriceRecord] {
        filter_window(&self.records, start, end)
    }

    /// BLAKE3 fingerprint of the merged series.
    pub fn fingerprint(&self) -> String {
        dataset_hash(&self.records)
    }

    /// One full refresh for `view`.
    pub fn render(&self, view: &ViewConfig) -> DisplayModel {
        let _scope = ProfileScope::new("pipeline.render");
        let window = self.window(view.start_date, view.end_date);
        let model = DisplayModel::build(window, view, &self.metrics);
        for warning in model.warnings() {
            tracing::debug!(%warning, "window warning");
        }
        model
    }
}

/// Inclusive date filter over a date-sorted slice.
///
/// An inverted range, or one that matches nothing, gives an empty slice.
pub fn filter_window(records: &[PriceRecord], start: NaiveDate, end: NaiveDate) -> &[PriceRecord] {
    if start > end {
        return &records[..0];
    }
    let lo = records.partition_point(|r| r.date < start);
    let hi = records.partition_point(|r| r.date <= end);
    &records[lo..hi]
}
