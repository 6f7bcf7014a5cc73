//! Bottom status bar: window size, warnings, refresh time, key hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let model = &app.model;
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(format!(" {} records", model.len()), theme::accent()));
    if let Some((first, last)) = model.window_span() {
        spans.push(Span::styled(
            format!(" {} .. {}", first.format("%Y-%m-%d"), last.format("%Y-%m-%d")),
            theme::secondary(),
        ));
    }
    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
        spans.push(Span::raw(" | "));
    }

    spans.push(Span::styled(
        format!("refresh {:.2}ms", app.last_refresh.as_secs_f64() * 1000.0),
        theme::muted(),
    ));
    spans.push(Span::styled("  ? help  q quit", theme::muted()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
