use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, error, warn};

use cm_core::ports::HistoryObserver;
use cm_core::HistoryEvent;

/// Token returned by [`NotificationBus::subscribe`].
///
/// Hand it back to [`NotificationBus::unsubscribe`] to stop delivery.
#[must_use = "dropping the handle makes the subscription impossible to remove"]
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

impl SubscriptionHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Synchronous fan-out of [`HistoryEvent`]s to registered observers.
///
/// Delivery happens on the publishing task, in subscription order. A
/// failing or panicking observer is logged and skipped; the others still
/// receive the event and the publisher never sees the failure.
#[derive(Default)]
pub struct NotificationBus {
    next_id: AtomicU64,
    observers: RwLock<Vec<(u64, Arc<dyn HistoryObserver>)>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, observer: Arc<dyn HistoryObserver>) -> SubscriptionHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut observers = self.observers.write().unwrap_or_else(|p| p.into_inner());
        observers.push((id, observer));
        debug!(subscription_id = id, "history observer subscribed");
        SubscriptionHandle(id)
    }

    /// Returns `false` when the handle was already removed.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) -> bool {
        let mut observers = self.observers.write().unwrap_or_else(|p| p.into_inner());
        let before = observers.len();
        observers.retain(|(id, _)| *id != handle.0);
        let removed = observers.len() != before;
        debug!(subscription_id = handle.0, removed, "history observer unsubscribed");
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .len()
    }

    /// Deliver `event` to every observer. Returns how many handled it without error.
    pub fn publish(&self, event: &HistoryEvent) -> usize {
        // Snapshot so observers may (un)subscribe from inside a callback.
        let observers: Vec<(u64, Arc<dyn HistoryObserver>)> = self
            .observers
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone();

        let mut delivered = 0;
        for (id, observer) in observers {
            match catch_unwind(AssertUnwindSafe(|| observer.on_history_changed(event))) {
                Ok(Ok(())) => delivered += 1,
                Ok(Err(err)) => {
                    warn!(subscription_id = id, error = %err, "history observer failed");
                }
                Err(_) => {
                    error!(subscription_id = id, "history observer panicked");
                }
            }
        }
        delivered
    }
}
