//! DisplayModel: everything a front end needs to draw one refresh.
//!
//! Built by [`crate::TimeSeriesPipeline::render`]. Series are aligned with the
//! filtered window: index i of every vector refers to `dates[i]`. Optional
//! panels are `None` when their toggle is off, so a renderer cannot draw a
//! panel the user hid.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{MetricsConfig, ViewConfig};
use crate::domain::PriceRecord;
use crate::metrics::{
    summary, DailyReturn, DerivedSeries, MovingAverage, Summary, Volatility,
};

/// Placeholder for absent values in text output.
pub const ABSENT: &str = "—";

/// Daily return and its rolling volatility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub daily_return: Vec<Option<f64>>,
    pub volatility: Vec<Option<f64>>,
}

/// One row of the recent-data table: the record plus its derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRow {
    pub record: PriceRecord,
    pub moving_average: Option<f64>,
    pub daily_return: Option<f64>,
    pub volatility: Option<f64>,
}

/// Conditions worth surfacing next to the charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowWarning {
    /// Start date after end date.
    InvertedRange,
    /// No records in the window.
    EmptyWindow,
    /// Fewer records than the moving-average window; the overlay is partial or missing.
    ShortForMovingAverage { records: usize, window: usize },
    /// Not enough returns for a single volatility value.
    ShortForVolatility { records: usize, window: usize },
}

impl std::fmt::Display for WindowWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowWarning::InvertedRange => write!(f, "start date is after end date"),
            WindowWarning::EmptyWindow => write!(f, "no records in the selected range"),
            WindowWarning::ShortForMovingAverage { records, window } => {
                write!(f, "{records} records, moving average needs {window}")
            }
            WindowWarning::ShortForVolatility { records, window } => {
                write!(f, "{records} records, volatility needs {}", window + 1)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayModel {
    pub view: ViewConfig,
    pub moving_average_window: usize,
    pub volatility_window: usize,
    pub dates: Vec<NaiveDate>,
    pub close: Vec<f64>,
    pub volume: Vec<u64>,
    /// Present iff `view.show_moving_average`.
    pub moving_average: Option<Vec<Option<f64>>>,
    /// Present iff `view.show_risk_analysis`.
    pub risk: Option<RiskAnalysis>,
    /// Absent for an empty window; front ends show placeholders.
    pub summary: Option<Summary>,
    /// Last `preview_rows` records of the window, oldest first.
    pub preview: Vec<EnrichedRow>,
}

impl DisplayModel {
    /// Compute every panel for `window`. `window` must be date-sorted.
    pub fn build(window: &[PriceRecord], view: &ViewConfig, metrics: &MetricsConfig) -> Self {
        let moving_average = view
            .show_moving_average
            .then(|| MovingAverage::new(metrics.moving_average_window).compute(window));

        let risk = view.show_risk_analysis.then(|| RiskAnalysis {
            daily_return: DailyReturn.compute(window),
            volatility: Volatility::new(metrics.volatility_window).compute(window),
        });

        let tail_start = window.len().saturating_sub(metrics.preview_rows);
        let preview = window[tail_start..]
            .iter()
            .enumerate()
            .map(|(offset, record)| {
                let i = tail_start + offset;
                EnrichedRow {
                    record: record.clone(),
                    moving_average: moving_average.as_ref().and_then(|ma| ma[i]),
                    daily_return: risk.as_ref().and_then(|r| r.daily_return[i]),
                    volatility: risk.as_ref().and_then(|r| r.volatility[i]),
                }
            })
            .collect();

        Self {
            view: *view,
            moving_average_window: metrics.moving_average_window,
            volatility_window: metrics.volatility_window,
            dates: window.iter().map(|r| r.date).collect(),
            close: window.iter().map(|r| r.close).collect(),
            volume: window.iter().map(|r| r.volume).collect(),
            moving_average,
            risk,
            summary: summary(window),
            preview,
        }
    }

    /// Number of records in the window.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First and last date actually present in the window.
    pub fn window_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }

    pub fn warnings(&self) -> Vec<WindowWarning> {
        let mut warnings = Vec::new();
        if self.view.is_inverted() {
            warnings.push(WindowWarning::InvertedRange);
        }
        if self.is_empty() {
            warnings.push(WindowWarning::EmptyWindow);
            return warnings;
        }
        let records = self.len();
        if self.moving_average.is_some() && records < self.moving_average_window {
            warnings.push(WindowWarning::ShortForMovingAverage {
                records,
                window: self.moving_average_window,
            });
        }
        if self.risk.is_some() && records <= self.volatility_window {
            warnings.push(WindowWarning::ShortForVolatility {
                records,
                window: self.volatility_window,
            });
        }
        warnings
    }

    /// (index, close) pairs.
    pub fn price_points(&self) -> Vec<(f64, f64)> {
        self.close
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_finite())
            .map(|(i, &c)| (i as f64, c))
            .collect()
    }

    /// (index, average) pairs; empty when the overlay is off.
    pub fn moving_average_points(&self) -> Vec<(f64, f64)> {
        self.moving_average.as_deref().map(present_points).unwrap_or_default()
    }

    pub fn return_points(&self) -> Vec<(f64, f64)> {
        self.risk
            .as_ref()
            .map(|r| present_points(&r.daily_return))
            .unwrap_or_default()
    }

    pub fn volatility_points(&self) -> Vec<(f64, f64)> {
        self.risk
            .as_ref()
            .map(|r| present_points(&r.volatility))
            .unwrap_or_default()
    }

    pub fn volume_points(&self) -> Vec<(f64, f64)> {
        self.volume
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v as f64))
            .collect()
    }

    /// Column headers of the recent-data table for the current toggles.
    pub fn preview_columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = ["Date", "Open", "High", "Low", "Close", "Volume"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        if self.moving_average.is_some() {
            columns.push(format!("MA{}", self.moving_average_window));
        }
        if self.risk.is_some() {
            columns.push("Daily Return (%)".into());
            columns.push("Volatility".into());
        }
        columns
    }

    /// Formatted recent-data cells, aligned with [`Self::preview_columns`].
    pub fn preview_cells(&self) -> Vec<Vec<String>> {
        self.preview
            .iter()
            .map(|row| {
                let r = &row.record;
                let mut cells = vec![
                    r.date.format("%Y-%m-%d").to_string(),
                    format!("{:.2}", r.open),
                    format!("{:.2}", r.high),
                    format!("{:.2}", r.low),
                    format!("{:.2}", r.close),
                    r.volume.to_string(),
                ];
                if self.moving_average.is_some() {
                    cells.push(format_optional(row.moving_average, 2));
                }
                if self.risk.is_some() {
                    cells.push(format_optional(row.daily_return, 4));
                    cells.push(format_optional(row.volatility, 4));
                }
                cells
            })
            .collect()
    }
}

/// Skip absent values, keeping original x positions so gaps stay gaps.
pub fn present_points(values: &[Option<f64>]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|y| (i as f64, y)))
        .collect()
}

/// Min and max y over any number of point sets.
pub fn y_bounds<'a>(sets: impl IntoIterator<Item = &'a [(f64, f64)]>) -> Option<(f64, f64)> {
    sets.into_iter()
        .flatten()
        .map(|&(_, y)| y)
        .fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
}

pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => ABSENT.to_string(),
    }
}
