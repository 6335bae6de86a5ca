//! Base trait for state values in the unidirectional data flow.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render a view)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` is the uninitialized baseline: a store constructed without an
/// explicit initial state feeds `State::default()` to the reducer once to
/// derive its first state.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
