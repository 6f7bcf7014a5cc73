//! Title and caption.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let lines = vec![
        Line::from(Span::styled(format!(" {}", app.display.title), theme::accent_bold())),
        Line::from(Span::styled(format!(" {}", app.display.caption), theme::secondary())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
