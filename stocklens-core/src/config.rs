//! Dashboard configuration.
//!
//! Two layers:
//! - [`DashboardConfig`]: optional TOML file naming the sources, display text,
//!   metric windows and initial view.
//! - [`ViewConfig`]: the four user controls. Rebuilt on every interaction and
//!   passed to [`crate::TimeSeriesPipeline::render`]; nothing else carries view
//!   state between refreshes.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metrics::{DEFAULT_MOVING_AVERAGE_WINDOW, DEFAULT_VOLATILITY_WINDOW};

/// Rows shown in the recent-data preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// The user's current selection: date window plus panel toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Inclusive lower bound.
    pub start_date: NaiveDate,
    /// Inclusive upper bound.
    pub end_date: NaiveDate,
    pub show_moving_average: bool,
    pub show_risk_analysis: bool,
}

impl ViewConfig {
    /// Whole dataset, both panels on. An empty dataset yields an empty window.
    pub fn full_span(span: Option<(NaiveDate, NaiveDate)>) -> Self {
        let (start_date, end_date) = span.unwrap_or_default();
        Self {
            start_date,
            end_date,
            show_moving_average: true,
            show_risk_analysis: true,
        }
    }

    /// True when the bounds cannot match any record.
    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }
}

/// Paths of the two CSV sources, concatenated in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub training: PathBuf,
    pub testing: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            training: PathBuf::from("TSLA training.csv"),
            testing: PathBuf::from("TSLA Testing.csv"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub caption: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Tesla Stock Financial Analysis".into(),
            caption: "Simple & clear dashboard for stock trend analysis".into(),
        }
    }
}

/// Window lengths for the derived series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub moving_average_window: usize,
    pub volatility_window: usize,
    pub preview_rows: usize,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
            volatility_window: DEFAULT_VOLATILITY_WINDOW,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.moving_average_window == 0 {
            return Err(ConfigError::Invalid(
                "metrics.moving_average_window must be >= 1".into(),
            ));
        }
        if self.volatility_window < 2 {
            return Err(ConfigError::Invalid(
                "metrics.volatility_window must be >= 2".into(),
            ));
        }
        if self.preview_rows == 0 {
            return Err(ConfigError::Invalid("metrics.preview_rows must be >= 1".into()));
        }
        Ok(())
    }
}

/// Initial control values. Unset dates fall back to the dataset span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewDefaults {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub show_moving_average: bool,
    pub show_risk_analysis: bool,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            show_moving_average: true,
            show_risk_analysis: true,
        }
    }
}

impl ViewDefaults {
    pub fn resolve(&self, span: Option<(NaiveDate, NaiveDate)>) -> ViewConfig {
        let full = ViewConfig::full_span(span);
        ViewConfig {
            start_date: self.start_date.unwrap_or(full.start_date),
            end_date: self.end_date.unwrap_or(full.end_date),
            show_moving_average: self.show_moving_average,
            show_risk_analysis: self.show_risk_analysis,
        }
    }
}

/// Top-level dashboard file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub sources: SourcesConfig,
    pub display: DisplayConfig,
    pub metrics: MetricsConfig,
    pub view: ViewDefaults,
}

impl DashboardConfig {
    /// Load and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// File config if a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading dashboard config");
                Self::from_file(p)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.metrics.validate()
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub training: Option<PathBuf>,
    pub testing: Option<PathBuf>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub hide_moving_average: bool,
    pub hide_risk_analysis: bool,
}

impl DashboardConfig {
    /// Layer flags over the loaded file. `hide_*` flags only ever switch a panel off.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(path) = &overrides.training {
            self.sources.training = path.clone();
        }
        if let Some(path) = &overrides.testing {
            self.sources.testing = path.clone();
        }
        if overrides.start_date.is_some() {
            self.view.start_date = overrides.start_date;
        }
        if overrides.end_date.is_some() {
            self.view.end_date = overrides.end_date;
        }
        if overrides.hide_moving_average {
            self.view.show_moving_average = false;
        }
        if overrides.hide_risk_analysis {
            self.view.show_risk_analysis = false;
        }
    }
}

/// Strict `YYYY-MM-DD`, as typed on the command line.
pub fn parse_flag_date(value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| ConfigError::Invalid(format!("date '{value}' is not YYYY-MM-DD: {e}")))
}
