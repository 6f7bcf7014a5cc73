//! Application state. Single owner, main thread only.
//!
//! The pipeline is loaded once; every control change rebuilds the
//! [`ViewConfig`] and replaces the [`DisplayModel`] with a fresh render.

use std::time::Duration;

use chrono::{Duration as Days, NaiveDate};

use stocklens_core::config::DisplayConfig;
use stocklens_core::profiling;
use stocklens_core::{DisplayModel, TimeSeriesPipeline, ViewConfig};

/// Sidebar rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    StartDate,
    EndDate,
    MovingAverage,
    RiskAnalysis,
}

impl Control {
    pub const ALL: [Control; 4] = [
        Control::StartDate,
        Control::EndDate,
        Control::MovingAverage,
        Control::RiskAnalysis,
    ];

    pub fn index(self) -> usize {
        match self {
            Control::StartDate => 0,
            Control::EndDate => 1,
            Control::MovingAverage => 2,
            Control::RiskAnalysis => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::StartDate => "Start date",
            Control::EndDate => "End date",
            Control::MovingAverage => "Show moving average",
            Control::RiskAnalysis => "Show risk analysis",
        }
    }

    /// Cursor moves stop at the ends instead of wrapping.
    pub fn next(self) -> Control {
        Control::ALL[(self.index() + 1).min(Control::ALL.len() - 1)]
    }

    pub fn prev(self) -> Control {
        Control::ALL[self.index().saturating_sub(1)]
    }

    pub fn is_date(self) -> bool {
        matches!(self, Control::StartDate | Control::EndDate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

pub struct AppState {
    pub pipeline: TimeSeriesPipeline,
    pub display: DisplayConfig,
    pub view: ViewConfig,
    pub model: DisplayModel,
    pub cursor: Control,
    pub show_help: bool,
    pub running: bool,
    /// Duration of the last `render`.
    pub last_refresh: Duration,
    pub refresh_count: u64,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(pipeline: TimeSeriesPipeline, display: DisplayConfig, view: ViewConfig) -> Self {
        let (model, last_refresh) = profiling::profile("tui.render", || pipeline.render(&view));
        let mut app = Self {
            pipeline,
            display,
            view,
            model,
            cursor: Control::StartDate,
            show_help: false,
            running: true,
            last_refresh,
            refresh_count: 1,
            status_message: None,
        };
        app.update_status();
        app
    }

    /// Recompute the display model for the current view.
    pub fn refresh(&mut self) {
        let pipeline = &self.pipeline;
        let view = self.view;
        let (model, elapsed) = profiling::profile("tui.render", || pipeline.render(&view));
        self.model = model;
        self.last_refresh = elapsed;
        self.refresh_count += 1;
        self.update_status();
    }

    /// Move the focused date by `days`, clamped to the dataset span.
    /// No-op on checkbox rows and on an empty dataset.
    pub fn step_date(&mut self, days: i64) {
        let Some((first, last)) = self.pipeline.span() else {
            return;
        };
        let target = match self.cursor {
            Control::StartDate => &mut self.view.start_date,
            Control::EndDate => &mut self.view.end_date,
            _ => return,
        };
        let stepped = target
            .checked_add_signed(Days::days(days))
            .unwrap_or(*target);
        let clamped = stepped.clamp(first, last);
        if clamped != *target {
            *target = clamped;
            self.refresh();
        }
    }

    /// Flip the focused checkbox. No-op on date rows.
    pub fn toggle(&mut self) {
        match self.cursor {
            Control::MovingAverage => {
                self.view.show_moving_average = !self.view.show_moving_average;
            }
            Control::RiskAnalysis => {
                self.view.show_risk_analysis = !self.view.show_risk_analysis;
            }
            _ => return,
        }
        self.refresh();
    }

    /// Both dates back to the full dataset span; toggles are kept.
    pub fn reset_dates(&mut self) {
        let full = self.pipeline.default_view();
        self.view.start_date = full.start_date;
        self.view.end_date = full.end_date;
        self.refresh();
    }

    pub fn date_value(&self, control: Control) -> Option<NaiveDate> {
        match control {
            Control::StartDate => Some(self.view.start_date),
            Control::EndDate => Some(self.view.end_date),
            _ => None,
        }
    }

    pub fn checkbox_value(&self, control: Control) -> Option<bool> {
        match control {
            Control::MovingAverage => Some(self.view.show_moving_average),
            Control::RiskAnalysis => Some(self.view.show_risk_analysis),
            _ => None,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    /// Surface window warnings, most important first.
    fn update_status(&mut self) {
        let warnings = self.model.warnings();
        if warnings.is_empty() {
            self.status_message = None;
        } else {
            let text = warnings
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            self.set_warning(text);
        }
    }
}
