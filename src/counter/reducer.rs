//! Reducer for the counter.

use crate::flux::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Reducer for counter state transitions.
///
/// Pure function: rendering and event wiring happen around the dispatch
/// call, never in here. Arithmetic saturates at the `i64` bounds, and any
/// action the match does not recognize falls through to the identity arm,
/// so the reducer is total.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            CounterAction::Increment => CounterState::new(state.value().saturating_add(1)),
            CounterAction::Decrement => CounterState::new(state.value().saturating_sub(1)),
            _ => state,
        }
    }
}
