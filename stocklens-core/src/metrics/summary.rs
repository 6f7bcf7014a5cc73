//! Headline figures for a window: latest close, highest high, lowest low.

use serde::{Deserialize, Serialize};

use crate::domain::PriceRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub latest: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl Summary {
    /// Values rounded to cents for display.
    pub fn rounded(&self) -> Summary {
        Summary {
            latest: round_to(self.latest, 2),
            highest: round_to(self.highest, 2),
            lowest: round_to(self.lowest, 2),
        }
    }
}

/// `None` for an empty window; there is nothing meaningful to show.
pub fn summary(records: &[PriceRecord]) -> Option<Summary> {
    let last = records.last()?;
    let highest = records.iter().map(|r| r.high).fold(f64::NEG_INFINITY, f64::max);
    let lowest = records.iter().map(|r| r.low).fold(f64::INFINITY, f64::min);
    Some(Summary {
        latest: last.close,
        highest,
        lowest,
    })
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}
