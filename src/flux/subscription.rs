//! Observer bookkeeping shared by both store flavors.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

type Observer = Box<dyn FnMut() + Send + 'static>;

/// Handle returned by `subscribe`.
///
/// Removing the observer:
/// - [`Subscription::unsubscribe`] removes it explicitly and is idempotent;
///   calling it twice has no additional effect.
/// - Dropping the subscription removes the observer as well.
/// - [`Subscription::detach`] keeps the observer registered for the store's
///   lifetime and discards the handle.
pub struct Subscription {
    active: Arc<AtomicBool>,
    detached: bool,
}

impl Subscription {
    fn new(active: Arc<AtomicBool>) -> Self {
        Self {
            active,
            detached: false,
        }
    }

    /// Remove the observer. Safe to call more than once.
    pub fn unsubscribe(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// True while the observer is still registered.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Keep the observer registered for the store's lifetime.
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if !self.detached {
            self.unsubscribe();
        }
    }
}

struct Entry {
    id: u64,
    active: Arc<AtomicBool>,
    observer: Observer,
}

/// Registration-ordered set of observers.
///
/// Interior mutability lets `subscribe` take `&self` on both store
/// flavors. Unsubscribed entries are dropped lazily during the next
/// notification pass.
pub(super) struct ObserverRegistry {
    entries: Mutex<Vec<Entry>>,
    next_id: AtomicU64,
}

impl ObserverRegistry {
    pub(super) fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    pub(super) fn subscribe(&self, observer: Observer) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let active = Arc::new(AtomicBool::new(true));
        self.entries.lock().push(Entry {
            id,
            active: Arc::clone(&active),
            observer,
        });
        Subscription::new(active)
    }

    /// Invoke every registered observer in registration order.
    ///
    /// The entries are taken out of the lock for the duration of the pass,
    /// so a callback may subscribe further observers (they run starting
    /// with the next pass) or read shared state without deadlocking.
    ///
    /// Each invocation is isolated: a panicking observer is logged and
    /// removed, and the remaining observers still run.
    pub(super) fn notify(&self) {
        let mut batch = std::mem::take(&mut *self.entries.lock());

        let mut kept = Vec::with_capacity(batch.len());
        for mut entry in batch.drain(..) {
            if !entry.active.load(Ordering::SeqCst) {
                continue;
            }
            match panic::catch_unwind(AssertUnwindSafe(|| (entry.observer)())) {
                Ok(()) => kept.push(entry),
                Err(payload) => {
                    entry.active.store(false, Ordering::SeqCst);
                    tracing::error!(
                        observer = entry.id,
                        panic = panic_message(payload.as_ref()),
                        "observer panicked during notification; removing it"
                    );
                }
            }
        }

        // Merge back while preserving registration order: observers added
        // during the pass landed in the registry behind our backs.
        let mut entries = self.entries.lock();
        let added = std::mem::replace(&mut *entries, kept);
        entries.extend(added);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
