//! Counter feature module.
//!
//! The demo feature built on the flux core:
//! - `state.rs` - the counter value (saturating `i64` newtype)
//! - `action.rs` - increment/decrement plus the bootstrap no-op
//! - `reducer.rs` - pure transitions (no side effects)

mod action;
mod reducer;
mod state;

pub use action::CounterAction;
pub use reducer::CounterReducer;
pub use state::CounterState;
