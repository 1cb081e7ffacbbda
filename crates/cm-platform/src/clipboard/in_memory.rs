use anyhow::{anyhow, Result};
use std::sync::Mutex;

use cm_core::ports::ClipboardSourcePort;

/// Process-local clipboard for headless runs and tests.
#[derive(Default)]
pub struct InMemoryClipboard {
    text: Mutex<Option<String>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Mutex::new(Some(text.into())),
        }
    }

    /// Drop the current text, as if another application cleared it.
    pub fn clear(&self) -> Result<()> {
        let mut guard = self
            .text
            .lock()
            .map_err(|_| anyhow!("in-memory clipboard lock poisoned"))?;
        *guard = None;
        Ok(())
    }
}

impl ClipboardSourcePort for InMemoryClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        let guard = self
            .text
            .lock()
            .map_err(|_| anyhow!("in-memory clipboard lock poisoned"))?;
        Ok(guard.clone())
    }

    fn write_text(&self, text: String) -> Result<()> {
        let mut guard = self
            .text
            .lock()
            .map_err(|_| anyhow!("in-memory clipboard lock poisoned"))?;
        *guard = Some(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(InMemoryClipboard::new().read_text().unwrap(), None);
    }

    #[test]
    fn read_reflects_latest_write() {
        let clipboard = InMemoryClipboard::with_text("first");
        clipboard.write_text("second".into()).unwrap();
        assert_eq!(clipboard.read_text().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn clear_removes_text() {
        let clipboard = InMemoryClipboard::with_text("first");
        clipboard.clear().unwrap();
        assert_eq!(clipboard.read_text().unwrap(), None);
    }
}
