//! Keyboard input dispatch: help overlay first, then global keys, then the sidebar.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::AppState;

/// Days moved by `h`/`l`.
pub const SMALL_STEP_DAYS: i64 = 1;
/// Days moved by `H`/`L`.
pub const LARGE_STEP_DAYS: i64 = 30;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }

    // The help overlay swallows everything; any close key dismisses it.
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('r') => {
            app.reset_dates();
            // Window warnings outrank the confirmation.
            if app.model.warnings().is_empty() {
                app.set_status("Dates reset to full span");
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.cursor = app.cursor.next(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor = app.cursor.prev(),
        KeyCode::Char('h') | KeyCode::Left => app.step_date(-SMALL_STEP_DAYS),
        KeyCode::Char('l') | KeyCode::Right => app.step_date(SMALL_STEP_DAYS),
        KeyCode::Char('H') => app.step_date(-LARGE_STEP_DAYS),
        KeyCode::Char('L') => app.step_date(LARGE_STEP_DAYS),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Control, StatusLevel};
    use crate::test_helpers::make_app;
    use crossterm::event::KeyEventState;

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = make_app(30);
            press(&mut app, code);
            assert!(!app.running);
        }
        let mut app = make_app(30);
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app(30);
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key(&mut app, release);
        assert!(app.running);
    }

    #[test]
    fn cursor_moves_with_vim_keys_and_arrows() {
        let mut app = make_app(30);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.cursor, Control::MovingAverage);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.cursor, Control::EndDate);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.cursor, Control::StartDate);
    }

    #[test]
    fn small_and_large_date_steps() {
        let mut app = make_app(90);
        let start = app.view.start_date;
        press(&mut app, KeyCode::Char('l'));
        press(&mut app, KeyCode::Right);
        assert_eq!((app.view.start_date - start).num_days(), 2);
        press(&mut app, KeyCode::Char('L'));
        assert_eq!((app.view.start_date - start).num_days(), 32);
        press(&mut app, KeyCode::Char('H'));
        press(&mut app, KeyCode::Char('h'));
        assert_eq!((app.view.start_date - start).num_days(), 1);
        assert_eq!(app.model.len(), 89);
    }

    #[test]
    fn space_and_enter_toggle_checkboxes() {
        let mut app = make_app(30);
        app.cursor = Control::MovingAverage;
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.view.show_moving_average);
        press(&mut app, KeyCode::Enter);
        assert!(app.view.show_moving_average);
    }

    #[test]
    fn reset_key_restores_span() {
        let mut app = make_app(60);
        press(&mut app, KeyCode::Char('L'));
        assert_eq!(app.model.len(), 30);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.model.len(), 60);
        assert_eq!(app.view, app.pipeline.default_view());
        assert_eq!(
            app.status_message,
            Some(("Dates reset to full span".to_string(), StatusLevel::Info))
        );
    }

    #[test]
    fn reset_keeps_short_window_warning() {
        let mut app = make_app(10);
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.model.warnings().is_empty());
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(level, StatusLevel::Warning);
        assert!(msg.contains("moving average needs 20"), "{msg}");
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = make_app(30);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, Control::StartDate);

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
    }
}
