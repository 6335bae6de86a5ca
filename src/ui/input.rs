use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Map a key press onto the counter app.
///
/// `+`/`=`, Up, and `k` increment; `-`/`_`, Down, and `j` decrement;
/// `q`, Esc, or Ctrl+C quit. Everything else is ignored.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            app.increment()
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Char('j') | KeyCode::Down => {
            app.decrement()
        }
        _ => {}
    }
}

/// Map a mouse event onto the counter app.
///
/// When the click-anywhere wiring is enabled, any button press anywhere
/// in the terminal dispatches an increment. Otherwise mouse events are
/// ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !app.click_anywhere_increments() {
        return;
    }

    if matches!(mouse.kind, MouseEventKind::Down(_)) {
        app.increment();
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::flux::SharedStore;
    use crossterm::event::{KeyEventState, MouseButton};

    fn make_app(click_anywhere: bool) -> App {
        let config = Config {
            click_anywhere_increments: click_anywhere,
            ..Config::default()
        };
        App::new(SharedStore::new(), &config)
    }

    fn press_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn press_mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn plus_and_up_increment() {
        let mut app = make_app(false);
        handle_key(&mut app, press_key(KeyCode::Char('+')));
        handle_key(&mut app, press_key(KeyCode::Char('=')));
        handle_key(&mut app, press_key(KeyCode::Up));
        handle_key(&mut app, press_key(KeyCode::Char('k')));
        assert_eq!(app.state().value(), 4);
    }

    #[test]
    fn minus_and_down_decrement() {
        let mut app = make_app(false);
        handle_key(&mut app, press_key(KeyCode::Char('-')));
        handle_key(&mut app, press_key(KeyCode::Char('_')));
        handle_key(&mut app, press_key(KeyCode::Down));
        handle_key(&mut app, press_key(KeyCode::Char('j')));
        assert_eq!(app.state().value(), -4);
    }

    #[test]
    fn quit_keys_request_quit() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = make_app(false);
            handle_key(&mut app, press_key(code));
            assert!(app.should_quit());
        }
    }

    #[test]
    fn ctrl_c_requests_quit() {
        let mut app = make_app(false);
        let key = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };
        handle_key(&mut app, key);
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app(false);
        let key = KeyEvent {
            code: KeyCode::Char('+'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        handle_key(&mut app, key);
        assert_eq!(app.state().value(), 0);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut app = make_app(false);
        handle_key(&mut app, press_key(KeyCode::Char('x')));
        handle_key(&mut app, press_key(KeyCode::Enter));
        assert_eq!(app.state().value(), 0);
        assert!(!app.should_quit());
    }

    #[test]
    fn mouse_press_increments_when_enabled() {
        let mut app = make_app(true);
        handle_mouse(&mut app, press_mouse(MouseEventKind::Down(MouseButton::Left)));
        handle_mouse(&mut app, press_mouse(MouseEventKind::Down(MouseButton::Right)));
        assert_eq!(app.state().value(), 2);
    }

    #[test]
    fn mouse_press_ignored_when_disabled() {
        let mut app = make_app(false);
        handle_mouse(&mut app, press_mouse(MouseEventKind::Down(MouseButton::Left)));
        assert_eq!(app.state().value(), 0);
    }

    #[test]
    fn mouse_release_and_move_are_ignored() {
        let mut app = make_app(true);
        handle_mouse(&mut app, press_mouse(MouseEventKind::Up(MouseButton::Left)));
        handle_mouse(&mut app, press_mouse(MouseEventKind::Moved));
        assert_eq!(app.state().value(), 0);
    }
}
