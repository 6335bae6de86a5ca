//! Owned, single-threaded observable store.

use super::reducer::Reducer;
use super::subscription::{ObserverRegistry, Subscription};

/// Observable store for a single reducer.
///
/// The store owns exactly one piece of state and transitions it only
/// through [`Store::dispatch`]: the reducer computes the next state, the
/// store replaces the current one wholesale, then every registered
/// observer is invoked with no arguments, in registration order.
///
/// Dispatch takes `&mut self`, so re-entrant dispatch from inside an
/// observer callback is rejected at compile time. Observers that need to
/// read state from inside the callback should use [`SharedStore`].
///
/// [`SharedStore`]: super::SharedStore
pub struct Store<R: Reducer> {
    state: R::State,
    observers: ObserverRegistry,
}

impl<R: Reducer> Store<R> {
    /// Create a store bootstrapped through the reducer.
    ///
    /// Runs the reducer once over the default state and the default
    /// (unrecognized) action, establishing
    /// `state == reduce(State::default(), Action::default())`.
    pub fn new() -> Self
    where
        R::Action: Default,
    {
        Self::with_state(R::reduce(R::State::default(), R::Action::default()))
    }

    /// Create a store with an explicit initial state.
    pub fn with_state(initial: R::State) -> Self {
        Self {
            state: initial,
            observers: ObserverRegistry::new(),
        }
    }

    /// Current state. No side effects.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Apply `action` through the reducer, then notify every observer.
    ///
    /// Observers registered while the notification pass is running are
    /// not invoked until the next dispatch.
    pub fn dispatch(&mut self, action: R::Action) {
        let previous = std::mem::take(&mut self.state);
        self.state = R::reduce(previous, action);
        self.observers.notify();
    }

    /// Register an observer; it runs after every subsequent dispatch.
    ///
    /// The returned [`Subscription`] removes the observer when dropped or
    /// explicitly unsubscribed.
    pub fn subscribe(&self, observer: impl FnMut() + Send + 'static) -> Subscription {
        self.observers.subscribe(Box::new(observer))
    }
}

impl<R: Reducer> Default for Store<R>
where
    R::Action: Default,
{
    fn default() -> Self {
        Self::new()
    }
}
