//! A small unidirectional data flow core and the counter demo built on it.
//!
//! The [`flux`] module holds the reusable pieces: pure reducers over
//! immutable state, an observable [`flux::Store`], and a thread-safe
//! [`flux::SharedStore`]. The [`counter`] module is the canonical
//! feature built on that core, and [`ui`] renders it in the terminal.

pub mod config;
pub mod counter;
pub mod flux;
pub mod logging;
pub mod ui;
