//! Left sidebar: the four view controls, then a summary of the loaded data.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, Control};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Controls ")
        .title_style(theme::panel_title(true));

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Select Date Range");
    for control in [Control::StartDate, Control::EndDate] {
        if let Some(date) = app.date_value(control) {
            lines.push(control_line(
                app,
                control,
                format!("{:<11}{}", control.label(), date.format("%Y-%m-%d")),
            ));
        }
    }
    lines.push(Line::from(""));

    section(&mut lines, "Display Options");
    for control in [Control::MovingAverage, Control::RiskAnalysis] {
        if let Some(checked) = app.checkbox_value(control) {
            let mark = if checked { "[x]" } else { "[ ]" };
            lines.push(control_line(app, control, format!("{mark} {}", control.label())));
        }
    }
    lines.push(Line::from(""));

    section(&mut lines, "Dataset");
    let pipeline = &app.pipeline;
    lines.push(kv("Records", pipeline.len().to_string()));
    for source in pipeline.sources() {
        lines.push(kv(&short_label(&source.label), source.rows.to_string()));
    }
    let duplicates = pipeline.duplicate_dates();
    if duplicates > 0 {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", "Dup. dates"), theme::muted()),
            Span::styled(duplicates.to_string(), theme::warning()),
        ]));
    }
    let inconsistent = pipeline.inconsistent_records();
    if inconsistent > 0 {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", "Bad OHLC"), theme::muted()),
            Span::styled(inconsistent.to_string(), theme::warning()),
        ]));
    }
    match pipeline.span() {
        Some((first, last)) => {
            lines.push(kv("First", first.format("%Y-%m-%d").to_string()));
            lines.push(kv("Last", last.format("%Y-%m-%d").to_string()));
        }
        None => lines.push(Line::from(Span::styled("  no records loaded", theme::warning()))),
    }
    lines.push(kv("View", app.view.view_id()[..8].to_string()));

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn control_line<'a>(app: &AppState, control: Control, text: String) -> Line<'a> {
    if app.cursor == control {
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(text, theme::cursor()),
        ])
    } else {
        Line::from(vec![Span::raw("  "), Span::styled(text, theme::text())])
    }
}

fn kv<'a>(key: &str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {key:<12}"), theme::muted()),
        Span::styled(value, theme::secondary()),
    ])
}

/// File name only, cut to fit the key column.
fn short_label(label: &str) -> String {
    let name = std::path::Path::new(label)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| label.to_string());
    if name.chars().count() > 12 {
        let mut cut: String = name.chars().take(11).collect();
        cut.push('~');
        cut
    } else {
        name
    }
}
