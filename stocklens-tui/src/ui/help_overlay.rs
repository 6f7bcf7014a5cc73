//! Keyboard help, drawn over the dashboard.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard [?/Esc] close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();
    section(&mut lines, "Sidebar");
    key(&mut lines, "j / k, Down / Up", "Move between controls");
    key(&mut lines, "h / l, Left / Right", "Focused date -1 / +1 day");
    key(&mut lines, "H / L", "Focused date -30 / +30 days");
    key(&mut lines, "Space / Enter", "Toggle focused checkbox");
    key(&mut lines, "r", "Reset dates to the full dataset");
    lines.push(Line::from(""));
    section(&mut lines, "General");
    key(&mut lines, "?", "Toggle this help");
    key(&mut lines, "q / Esc", "Quit");
    lines.push(Line::from(""));
    section(&mut lines, "Notes");
    lines.push(Line::from(Span::styled(
        "  Dates are clamped to the loaded data. Metrics are recomputed",
        theme::muted(),
    )));
    lines.push(Line::from(Span::styled(
        "  over the selected window only; warm-up values show as gaps or —.",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>20}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
