//! Base trait for actions in the unidirectional data flow.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User actions (button presses, key presses)
/// - System events (timers, bootstrap)
///
/// Actions are transient: created by callers, consumed by the reducer on
/// dispatch, never stored. When the action type implements `Default`, the
/// default value serves as the bootstrap no-op a store dispatches once at
/// construction.
pub trait Action: Send + 'static {}
