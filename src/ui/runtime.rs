use crate::config::Config;
use crate::counter::CounterReducer;
use crate::flux::SharedStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

pub fn run(store: SharedStore<CounterReducer>, config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.click_anywhere_increments)?;
    let tick_rate = config.tick_rate();
    let mut app = App::new(store, config);
    let events = EventHandler::new(tick_rate);

    loop {
        if app.take_render_needed() {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => app.request_render(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
