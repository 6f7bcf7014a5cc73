//! Top-level UI layout: header, sidebar + dashboard body, status bar.

pub mod charts;
pub mod header;
pub mod help_overlay;
pub mod metrics_row;
pub mod preview_table;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::AppState;

/// Sidebar width in columns.
const SIDEBAR_WIDTH: u16 = 34;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::render(f, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
        .split(chunks[1]);

    sidebar::render(f, body[0], app);
    draw_dashboard(f, body[1], app);
    status_bar::render(f, chunks[2], app);

    if app.show_help {
        let area = f.area();
        help_overlay::render(f, area);
    }
}

/// Metrics, price, volume, optional risk row, recent data.
fn draw_dashboard(f: &mut Frame, area: Rect, app: &AppState) {
    let model = &app.model;
    // header row + borders
    let table_height = (app.pipeline.metrics().preview_rows as u16).saturating_add(3);

    let mut constraints = vec![
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(7),
    ];
    if model.risk.is_some() {
        constraints.push(Constraint::Min(8));
    }
    constraints.push(Constraint::Length(table_height));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    metrics_row::render(f, rows[0], model);
    charts::render_price(f, rows[1], model);
    charts::render_volume(f, rows[2], model);

    let table_area = if model.risk.is_some() {
        let risk = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[3]);
        charts::render_returns(f, risk[0], model);
        charts::render_volatility(f, risk[1], model);
        rows[4]
    } else {
        rows[3]
    };

    preview_table::render(f, table_area, model);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}


#[cfg(test)]
mod tests {
    use super::test_render::{buffer_text, draw_to_buffer};
    use super::*;
    use crate::app::Control;
    use crate::test_helpers::make_app;

    #[test]
    fn centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 40, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 60);
    }

    #[test]
    fn full_dashboard_draws_every_panel() {
        let app = make_app(60);
        let text = buffer_text(&draw_to_buffer(&app, 160, 60));
        for title in [
            "Tesla Stock Financial Analysis",
            "Controls",
            "Latest Price",
            "Stock Price",
            "Trading Volume",
            "Daily Return (%)",
            "Volatility",
            "Recent Data",
        ] {
            assert!(text.contains(title), "missing {title}");
        }
    }

    #[test]
    fn risk_row_disappears_when_toggled_off() {
        let mut app = make_app(60);
        app.cursor = Control::RiskAnalysis;
        app.toggle();
        let text = buffer_text(&draw_to_buffer(&app, 160, 60));
        assert!(!text.contains("Daily Return"));
        assert!(!text.contains("Volatility"));
        assert!(text.contains("Stock Price"));
    }

    #[test]
    fn empty_window_draws_placeholders() {
        let mut app = make_app(30);
        app.step_date(100);
        app.cursor = Control::EndDate;
        app.step_date(-100);
        let text = buffer_text(&draw_to_buffer(&app, 160, 60));
        assert!(text.contains("No data in selected range"));
        assert!(text.contains("—"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = make_app(30);
        let _ = draw_to_buffer(&app, 40, 12);
    }

    #[test]
    fn help_overlay_is_drawn_on_top() {
        let mut app = make_app(30);
        app.show_help = true;
        let text = buffer_text(&draw_to_buffer(&app, 160, 60));
        assert!(text.contains("Keyboard"));
    }
}
