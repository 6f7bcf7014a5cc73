//! StockLens TUI: terminal dashboard over the price pipeline.
//!
//! - Sidebar with the date window and the two panel toggles
//! - Latest / highest / lowest cards
//! - Price chart with moving-average overlay, volume bars
//! - Daily return and rolling volatility charts
//! - Recent-data table

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::{AppState, Control};
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
