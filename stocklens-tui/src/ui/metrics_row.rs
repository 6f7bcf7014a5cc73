//! Latest / Highest / Lowest cards.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use stocklens_core::display::ABSENT;
use stocklens_core::DisplayModel;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, model: &DisplayModel) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let rounded = model.summary.map(|s| s.rounded());
    let values = [
        ("Latest Price", rounded.map(|s| s.latest)),
        ("Highest Price", rounded.map(|s| s.highest)),
        ("Lowest Price", rounded.map(|s| s.lowest)),
    ];

    for (card, (label, value)) in cards.iter().zip(values) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::muted())
            .title(format!(" {label} "))
            .title_style(theme::secondary());
        let style = if value.is_some() {
            theme::accent_bold()
        } else {
            theme::muted()
        };
        let para = Paragraph::new(Span::styled(format_price(value), style))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, *card);
    }
}

/// `$` with two decimals, or the absent placeholder.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${v:.2}"),
        None => ABSENT.to_string(),
    }
}
