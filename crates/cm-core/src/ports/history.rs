use anyhow::Result;
use async_trait::async_trait;

use crate::ClipboardEntry;

/// Durable storage of the full, ordered history sequence.
#[async_trait]
pub trait HistoryPersistencePort: Send + Sync {
    /// Decode the stored sequence.
    ///
    /// A missing file is `Ok(vec![])`; corrupt content is an `Err` and the
    /// store decides how to degrade.
    async fn load(&self) -> Result<Vec<ClipboardEntry>>;

    /// Replace the stored sequence. A concurrent reader never observes a
    /// partially written file.
    async fn save(&self, entries: &[ClipboardEntry]) -> Result<()>;
}
