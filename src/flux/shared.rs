//! Cloneable store handle with serialized dispatch.

use std::sync::Arc;

use parking_lot::Mutex;

use super::reducer::Reducer;
use super::subscription::{ObserverRegistry, Subscription};

/// Cloneable handle to an observable store.
///
/// All clones refer to the same state and observer set. Dispatches are
/// serialized end to end by a dedicated gate mutex: reducer application,
/// state replacement, and the full notification pass complete before
/// another dispatch may begin. Observers therefore always see the state
/// exactly as produced by the triggering dispatch, never an intermediate
/// or future one.
///
/// The state lock itself is released before notification, so a callback
/// may call [`SharedStore::state`] re-entrantly. Dispatching from inside
/// a callback is unsupported and deadlocks on the gate.
///
/// A callback that captures a clone of the handle keeps the observer set
/// alive; capture only what the callback needs.
pub struct SharedStore<R: Reducer> {
    inner: Arc<SharedInner<R>>,
}

struct SharedInner<R: Reducer> {
    state: Mutex<R::State>,
    dispatch_gate: Mutex<()>,
    observers: ObserverRegistry,
}

impl<R: Reducer> Clone for SharedStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> SharedStore<R> {
    /// Create a store bootstrapped through the reducer, like
    /// [`Store::new`](super::Store::new).
    pub fn new() -> Self
    where
        R::Action: Default,
    {
        Self::with_state(R::reduce(R::State::default(), R::Action::default()))
    }

    /// Create a store with an explicit initial state.
    pub fn with_state(initial: R::State) -> Self {
        Self {
            inner: Arc::new(SharedInner {
                state: Mutex::new(initial),
                dispatch_gate: Mutex::new(()),
                observers: ObserverRegistry::new(),
            }),
        }
    }

    /// Clone of the current state. The lock is held only for the clone.
    pub fn state(&self) -> R::State {
        self.inner.state.lock().clone()
    }

    /// Apply `action` through the reducer, then notify every observer.
    pub fn dispatch(&self, action: R::Action) {
        let _gate = self.inner.dispatch_gate.lock();
        {
            let mut state = self.inner.state.lock();
            let previous = std::mem::take(&mut *state);
            *state = R::reduce(previous, action);
        }
        self.inner.observers.notify();
    }

    /// Register an observer; it runs after every subsequent dispatch.
    pub fn subscribe(&self, observer: impl FnMut() + Send + 'static) -> Subscription {
        self.inner.observers.subscribe(Box::new(observer))
    }
}

impl<R: Reducer> Default for SharedStore<R>
where
    R::Action: Default,
{
    fn default() -> Self {
        Self::new()
    }
}
