//! Recent-data table: the last rows of the window with their derived values.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use stocklens_core::DisplayModel;

use crate::theme;

pub fn render(f: &mut Frame, area: Rect, model: &DisplayModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" Recent Data (last {} rows) ", model.preview.len()))
        .title_style(theme::text().add_modifier(Modifier::BOLD));

    if model.preview.is_empty() {
        let para = Paragraph::new(Span::styled("No rows in selected range", theme::muted()))
            .block(block);
        f.render_widget(para, area);
        return;
    }

    let columns = model.preview_columns();
    let cells = model.preview_cells();
    let widths = column_widths(&columns, &cells);

    let header = Row::new(
        columns
            .iter()
            .map(|c| Cell::from(c.clone()).style(theme::accent_bold())),
    );

    // Newest first, like a quote screen.
    let rows = cells.iter().rev().zip(model.preview.iter().rev()).map(|(row, enriched)| {
        Row::new(row.iter().enumerate().map(|(i, text)| {
            let style = match (columns[i].as_str(), enriched.daily_return) {
                ("Daily Return (%)", Some(r)) => theme::change(r),
                ("Date", _) => theme::secondary(),
                _ => theme::text(),
            };
            Cell::from(text.clone()).style(style)
        }))
    });

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(block);
    f.render_widget(table, area);
}

/// Each column as wide as its widest cell or header.
fn column_widths(columns: &[String], cells: &[Vec<String>]) -> Vec<Constraint> {
    columns
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest = cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0);
            Constraint::Length(widest as u16)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_app;
    use crate::ui::test_render::{buffer_lines, draw_to_buffer};

    #[test]
    fn widths_fit_header_and_cells() {
        let columns = vec!["Date".to_string(), "Volume".to_string()];
        let cells = vec![vec!["2020-01-01".to_string(), "12".to_string()]];
        assert_eq!(
            column_widths(&columns, &cells),
            vec![Constraint::Length(10), Constraint::Length(6)]
        );
    }

    #[test]
    fn newest_row_is_listed_first() {
        let app = make_app(30);
        let lines = buffer_lines(&draw_to_buffer(&app, 160, 60));
        // Neither date is a sidebar value or an axis label.
        let newer = lines.iter().position(|l| l.contains("2020-03-30")).unwrap();
        let oldest = lines.iter().position(|l| l.contains("2020-03-22")).unwrap();
        assert!(newer < oldest);
        assert!(!lines.iter().any(|l| l.contains("2020-03-21")));
    }
}
