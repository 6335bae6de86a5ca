//! Unidirectional data-flow primitives.
//!
//! This module provides the base traits and containers for implementing
//! unidirectional state management: a pure reducer drives every state
//! transition, a store holds the current state, and observers are
//! notified after each dispatch.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Observers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of the managed value
//! - **Action**: User actions or system events
//! - **Reducer**: Pure function that transforms state based on actions
//! - **Store**: Holds the state, applies the reducer, notifies observers
//!
//! Two store flavors share the same observer bookkeeping: [`Store`] is the
//! single-threaded owned container, [`SharedStore`] is a cloneable handle
//! with mutex-serialized dispatch for hosts that push notifications across
//! threads.

mod action;
mod reducer;
mod shared;
mod state;
mod store;
mod subscription;

pub use action::Action;
pub use reducer::Reducer;
pub use shared::SharedStore;
pub use state::State;
pub use store::Store;
pub use subscription::Subscription;
