use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::Config;
use crate::counter::{CounterAction, CounterReducer, CounterState};
use crate::flux::{SharedStore, Subscription};

/// Application state for the terminal demo.
///
/// Owns a handle to the counter store and the render wiring: a store
/// subscription flips `render_needed` on every dispatch, and the event
/// loop draws a frame whenever the flag is set. The flag starts set so
/// the first pass renders the initial state.
pub struct App {
    store: SharedStore<CounterReducer>,
    render_needed: Arc<AtomicBool>,
    /// Held so the render observer stays registered for the app's lifetime.
    _render_subscription: Subscription,
    click_anywhere_increments: bool,
    should_quit: bool,
}

impl App {
    pub fn new(store: SharedStore<CounterReducer>, config: &Config) -> Self {
        let render_needed = Arc::new(AtomicBool::new(true));
        let dirty = Arc::clone(&render_needed);
        let render_subscription = store.subscribe(move || {
            dirty.store(true, Ordering::SeqCst);
        });

        Self {
            store,
            render_needed,
            _render_subscription: render_subscription,
            click_anywhere_increments: config.click_anywhere_increments,
            should_quit: false,
        }
    }

    /// Current counter state, pulled through the store handle.
    pub fn state(&self) -> CounterState {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn increment(&self) {
        self.store.dispatch(CounterAction::Increment);
    }

    pub fn decrement(&self) {
        self.store.dispatch(CounterAction::Decrement);
    }

    pub fn click_anywhere_increments(&self) -> bool {
        self.click_anywhere_increments
    }

    /// Consume the dirty flag; true when a frame should be drawn.
    pub fn take_render_needed(&mut self) -> bool {
        self.render_needed.swap(false, Ordering::SeqCst)
    }

    /// Force a redraw on the next pass (terminal resize).
    pub fn request_render(&mut self) {
        self.render_needed.store(true, Ordering::SeqCst);
    }
}
