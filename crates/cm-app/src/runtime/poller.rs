use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, info_span, warn, Instrument};

use cm_core::ports::ClipboardSourcePort;
use cm_core::RecordOutcome;

use crate::history::HistoryStore;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    Idle,
    Sampling,
}

#[derive(Debug, Error)]
pub enum PollerError {
    #[error("poller task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("failed to flush history on stop: {0:#}")]
    Flush(anyhow::Error),
}

/// Samples the clipboard on a fixed interval and feeds the history store.
///
/// The poller owns no history. It alternates between [`PollerState::Idle`]
/// and [`PollerState::Sampling`] once per tick.
pub struct Poller {
    clipboard: Arc<dyn ClipboardSourcePort>,
    store: Arc<HistoryStore>,
    interval: Duration,
    sampling: AtomicBool,
}

impl Poller {
    pub fn new(
        clipboard: Arc<dyn ClipboardSourcePort>,
        store: Arc<HistoryStore>,
        interval: Duration,
    ) -> Self {
        Self {
            clipboard,
            store,
            interval,
            sampling: AtomicBool::new(false),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> PollerState {
        if self.sampling.load(Ordering::Acquire) {
            PollerState::Sampling
        } else {
            PollerState::Idle
        }
    }

    /// Run one sampling cycle.
    ///
    /// Returns `None` when the clipboard held no text or could not be read.
    pub async fn tick_once(&self) -> Option<RecordOutcome> {
        self.sampling.store(true, Ordering::Release);

        let outcome = match self.clipboard.read_text() {
            Ok(Some(text)) => Some(self.store.record_if_changed(text).await),
            Ok(None) => {
                debug!("clipboard holds no text");
                None
            }
            Err(err) => {
                warn!(error = %format!("{err:#}"), "clipboard read failed, skipping tick");
                None
            }
        };

        self.sampling.store(false, Ordering::Release);
        outcome
    }

    /// Start sampling on a background task.
    pub fn spawn(self: Arc<Self>) -> PollerHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let store = Arc::clone(&self.store);
        let span = info_span!("runtime.poller", interval_ms = self.interval.as_millis() as u64);

        let task = tokio::spawn(self.run(shutdown_rx).instrument(span));

        PollerHandle {
            shutdown_tx,
            task,
            store,
        }
    }

    async fn run(self: Arc<Self>, mut shutdown_rx: watch::Receiver<bool>) {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!("clipboard poller started");

        loop {
            tokio::select! {
                biased;
                // A dropped sender also means stop.
                _ = shutdown_rx.changed() => break,
                _ = ticker.tick() => {}
            }

            // Outside select! so shutdown never cancels an in-flight tick.
            if let Some(outcome) = self.tick_once().await {
                if let Some(entry) = outcome.entry() {
                    debug!(hash = %entry.hash(), "clipboard change recorded");
                }
            }
        }

        info!("clipboard poller stopped");
    }
}

/// Running poller. Call [`PollerHandle::stop`] for an orderly shutdown.
pub struct PollerHandle {
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
    store: Arc<HistoryStore>,
}

impl PollerHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signal shutdown, wait for the in-flight tick, then flush the store.
    pub async fn stop(self) -> Result<(), PollerError> {
        // Err means the task already exited and dropped its receiver.
        let _ = self.shutdown_tx.send(true);
        self.task.await?;

        self.store.flush().await.map_err(PollerError::Flush)?;
        debug!("history flushed after poller stop");
        Ok(())
    }
}
