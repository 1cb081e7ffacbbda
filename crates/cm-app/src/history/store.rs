use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{debug, info_span, warn, Instrument};

use cm_core::ports::{ClockPort, HistoryPersistencePort};
use cm_core::{ClipboardEntry, HistoryEvent, RecordOutcome};

use crate::event::NotificationBus;

/// Ordered, append-only clipboard history backed by a persistence port.
///
/// Every append runs check, construct, append, save and publish under one
/// lock, so concurrent callers (the poller and the apply use case) never
/// interleave. Observers are notified while that lock is held and must not
/// call back into the store synchronously.
pub struct HistoryStore {
    entries: Mutex<Vec<ClipboardEntry>>,
    persistence: Arc<dyn HistoryPersistencePort>,
    clock: Arc<dyn ClockPort>,
    bus: Arc<NotificationBus>,
}

impl HistoryStore {
    /// Load persisted history, degrading to an empty history on failure.
    ///
    /// A missing file is the normal first-run case. A corrupt or unreadable
    /// file is logged; the next successful save replaces it.
    pub async fn open(
        persistence: Arc<dyn HistoryPersistencePort>,
        clock: Arc<dyn ClockPort>,
        bus: Arc<NotificationBus>,
    ) -> Self {
        let entries = match persistence.load().await {
            Ok(entries) => {
                let foreign = entries.iter().filter(|e| !e.verify_hash()).count();
                if foreign > 0 {
                    debug!(count = foreign, "loaded entries whose hash does not match content");
                }
                entries
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "failed to load clipboard history, starting empty");
                Vec::new()
            }
        };

        debug!(count = entries.len(), "history store opened");
        Self {
            entries: Mutex::new(entries),
            persistence,
            clock,
            bus,
        }
    }

    pub fn bus(&self) -> &Arc<NotificationBus> {
        &self.bus
    }

    /// Append `candidate` unless it repeats the latest entry.
    pub async fn record_if_changed(&self, candidate: impl Into<String>) -> RecordOutcome {
        let candidate = candidate.into();
        let span = info_span!("history.record", candidate_len = candidate.len());

        async move {
            let mut entries = self.entries.lock().await;

            let now = self.clock.now();
            if let Some(latest) = entries.last() {
                if latest.content() == candidate {
                    return RecordOutcome::Unchanged;
                }
                if now < latest.date() {
                    warn!(
                        latest = %latest.date(),
                        now = %now,
                        "clock went backwards, refusing to append"
                    );
                    return RecordOutcome::RejectedNonMonotonic;
                }
            }

            let entry = ClipboardEntry::new(candidate, now);
            entries.push(entry.clone());
            let len = entries.len();

            let outcome = match self.persistence.save(&entries).await {
                Ok(()) => RecordOutcome::Recorded(entry),
                Err(err) => {
                    let error = format!("{err:#}");
                    warn!(error = %error, "history appended but not persisted");
                    RecordOutcome::RecordedUnpersisted { entry, error }
                }
            };

            self.bus.publish(&HistoryEvent::Changed { len });
            debug!(len, "history entry recorded");
            outcome
        }
        .instrument(span)
        .await
    }

    /// Copy of the history, oldest first.
    pub async fn snapshot(&self) -> Vec<ClipboardEntry> {
        self.entries.lock().await.clone()
    }

    pub async fn latest(&self) -> Option<ClipboardEntry> {
        self.entries.lock().await.last().cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Persist the current history.
    pub async fn flush(&self) -> Result<()> {
        let entries = self.entries.lock().await;
        self.persistence.save(&entries).await?;
        debug!(count = entries.len(), "history flushed");
        Ok(())
    }
}
