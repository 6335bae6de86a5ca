use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tally::counter::{CounterAction, CounterReducer};
use tally::flux::Store;

fn counting_observer(calls: &Arc<AtomicUsize>) -> impl FnMut() + Send + 'static {
    let calls = Arc::clone(calls);
    move || {
        calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Swap in a silent panic hook for the duration of `f` so an expected
/// observer panic does not spray a backtrace into the test output.
fn with_quiet_panics<T>(f: impl FnOnce() -> T) -> T {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    let result = f();
    std::panic::set_hook(previous);
    result
}

/// Every dispatch invokes the observer exactly once.
#[test]
fn test_observer_runs_once_per_dispatch() {
    let mut store = Store::<CounterReducer>::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let _subscription = store.subscribe(counting_observer(&calls));

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Decrement);
    store.dispatch(CounterAction::Init);

    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

/// Observers fire in the order they subscribed.
#[test]
fn test_observers_run_in_registration_order() {
    let mut store = Store::<CounterReducer>::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    let labelled = |label: &'static str| {
        let order = Arc::clone(&order);
        move || order.lock().unwrap().push(label)
    };
    let _first = store.subscribe(labelled("first"));
    let _second = store.subscribe(labelled("second"));
    let _third = store.subscribe(labelled("third"));

    store.dispatch(CounterAction::Increment);

    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}

/// Subscribing alone never invokes the observer; only dispatch does.
#[test]
fn test_subscribe_does_not_notify_retroactively() {
    let mut store = Store::<CounterReducer>::new();
    store.dispatch(CounterAction::Increment);

    let calls = Arc::new(AtomicUsize::new(0));
    let _subscription = store.subscribe(counting_observer(&calls));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    store.dispatch(CounterAction::Increment);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// Unsubscribed observers stop receiving notifications, and a second
/// unsubscribe is a no-op.
#[test]
fn test_unsubscribe_stops_notifications() {
    let mut store = Store::<CounterReducer>::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let subscription = store.subscribe(counting_observer(&calls));

    store.dispatch(CounterAction::Increment);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(subscription.is_active());

    subscription.unsubscribe();
    assert!(!subscription.is_active());
    store.dispatch(CounterAction::Increment);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    subscription.unsubscribe();
    store.dispatch(CounterAction::Increment);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// Dropping the handle unsubscribes, same as calling unsubscribe.
#[test]
fn test_drop_unsubscribes() {
    let mut store = Store::<CounterReducer>::new();
    let calls = Arc::new(AtomicUsize::new(0));

    {
        let _subscription = store.subscribe(counting_observer(&calls));
        store.dispatch(CounterAction::Increment);
    }

    store.dispatch(CounterAction::Increment);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

/// A detached observer outlives its handle.
#[test]
fn test_detach_keeps_observer_registered() {
    let mut store = Store::<CounterReducer>::new();
    let calls = Arc::new(AtomicUsize::new(0));

    store.subscribe(counting_observer(&calls)).detach();

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

/// A panicking observer is removed; the ones after it still run, both
/// during that pass and on later dispatches.
#[test]
fn test_panicking_observer_is_isolated() {
    let mut store = Store::<CounterReducer>::new();
    let before = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));

    let _first = store.subscribe(counting_observer(&before));
    let _bad = store.subscribe(|| panic!("observer failure"));
    let _last = store.subscribe(counting_observer(&after));

    with_quiet_panics(|| {
        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Increment);
    });

    assert_eq!(before.load(Ordering::SeqCst), 2);
    assert_eq!(after.load(Ordering::SeqCst), 2);
    assert_eq!(store.state().value(), 2);
}

/// Two stores keep separate observer sets.
#[test]
fn test_stores_notify_independently() {
    let mut left = Store::<CounterReducer>::new();
    let mut right = Store::<CounterReducer>::new();
    let left_calls = Arc::new(AtomicUsize::new(0));
    let right_calls = Arc::new(AtomicUsize::new(0));
    let _left_sub = left.subscribe(counting_observer(&left_calls));
    let _right_sub = right.subscribe(counting_observer(&right_calls));

    left.dispatch(CounterAction::Increment);
    left.dispatch(CounterAction::Increment);
    right.dispatch(CounterAction::Decrement);

    assert_eq!(left_calls.load(Ordering::SeqCst), 2);
    assert_eq!(right_calls.load(Ordering::SeqCst), 1);
    assert_eq!(left.state().value(), 2);
    assert_eq!(right.state().value(), -1);
}
