//! Actions for the counter.

use crate::flux::Action;

/// Actions that can be dispatched to the counter reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterAction {
    /// Bootstrap no-op. A store dispatches this once at construction to
    /// derive its initial state; the reducer does not recognize it, so the
    /// state passes through unchanged.
    #[default]
    Init,

    /// Add one to the counter.
    Increment,

    /// Subtract one from the counter.
    Decrement,
}

impl Action for CounterAction {}
