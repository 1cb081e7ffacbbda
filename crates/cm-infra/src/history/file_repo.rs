use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, debug_span, Instrument};

use cm_core::{ports::HistoryPersistencePort, ClipboardEntry};

/// History stored as one JSON array of `{content, date, hash}` objects.
pub struct JsonFileHistoryRepository {
    path: PathBuf,
}

impl JsonFileHistoryRepository {
    /// Creates a repository that reads and writes the given history file.
    ///
    /// # Examples
    ///
    /// ```
    /// use cm_infra::JsonFileHistoryRepository;
    ///
    /// let repo = JsonFileHistoryRepository::new("/tmp/clipboardHistory.json");
    /// assert!(repo.path().ends_with("clipboardHistory.json"));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Ensure the parent directory exists, creating it if necessary.
    async fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create history dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Write to a sibling temp file, sync it, then rename over the target.
    ///
    /// The target is either the previous contents or the complete new
    /// contents; readers never see a partial file.
    async fn atomic_write(&self, content: &[u8]) -> Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.tmp_path();
        let mut file = fs::File::create(&tmp_path)
            .await
            .with_context(|| format!("create temp history failed: {}", tmp_path.display()))?;
        file.write_all(content)
            .await
            .with_context(|| format!("write temp history failed: {}", tmp_path.display()))?;
        file.sync_all()
            .await
            .with_context(|| format!("sync temp history failed: {}", tmp_path.display()))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).await.with_context(|| {
            format!(
                "rename temp history to target failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl HistoryPersistencePort for JsonFileHistoryRepository {
    async fn load(&self) -> Result<Vec<ClipboardEntry>> {
        let span = debug_span!("infra.history_file.load", path = %self.path.display());
        async {
            let content = match fs::read(&self.path).await {
                Ok(bytes) => bytes,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    debug!("history file missing, starting empty");
                    return Ok(Vec::new());
                }
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("read history failed: {}", self.path.display()))
                }
            };

            let entries: Vec<ClipboardEntry> = serde_json::from_slice(&content)
                .with_context(|| format!("decode history failed: {}", self.path.display()))?;

            debug!(count = entries.len(), "history loaded");
            Ok::<_, anyhow::Error>(entries)
        }
        .instrument(span)
        .await
    }

    async fn save(&self, entries: &[ClipboardEntry]) -> Result<()> {
        let span = debug_span!(
            "infra.history_file.save",
            path = %self.path.display(),
            count = entries.len(),
        );
        async {
            let content = serde_json::to_vec(entries).context("serialize history failed")?;
            self.atomic_write(&content).await?;
            debug!("history saved");
            Ok::<_, anyhow::Error>(())
        }
        .instrument(span)
        .await
    }
}
