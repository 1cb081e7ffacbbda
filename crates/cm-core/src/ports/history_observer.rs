//! History observer port
//!
//! Presentation or logging layers implement this to be told that the
//! history changed. Delivery is synchronous with publication.

use anyhow::Result;

use crate::HistoryEvent;

/// Callback handler for history change events.
///
/// Errors and panics raised here are isolated by the bus; they never reach
/// the code that mutated the history.
pub trait HistoryObserver: Send + Sync {
    fn on_history_changed(&self, event: &HistoryEvent) -> Result<()>;
}

impl<F> HistoryObserver for F
where
    F: Fn(&HistoryEvent) -> Result<()> + Send + Sync,
{
    fn on_history_changed(&self, event: &HistoryEvent) -> Result<()> {
        self(event)
    }
}
