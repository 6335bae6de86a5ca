//! Terminal renderer and event wiring for the counter demo.
//!
//! The UI is a collaborator of the store, not part of it: a subscription
//! marks the frame dirty on every state change, the event loop redraws
//! and pulls the new value through the store handle, and input events
//! dispatch actions back into the store.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
