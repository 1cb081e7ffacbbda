use anyhow::{anyhow, Result};
use clipboard_rs::{Clipboard, ClipboardContext, ContentFormat};
use std::sync::{Arc, Mutex};
use tracing::{debug, debug_span};

use cm_core::ports::ClipboardSourcePort;

/// OS clipboard implementation using clipboard-rs
pub struct SystemClipboard {
    inner: Arc<Mutex<ClipboardContext>>,
}

fn map_clipboard_err<T>(
    result: std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>,
) -> Result<T> {
    result.map_err(|e| anyhow!(e))
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let context = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to create clipboard context: {}", e))?;
        Ok(Self {
            inner: Arc::new(Mutex::new(context)),
        })
    }
}

impl ClipboardSourcePort for SystemClipboard {
    fn read_text(&self) -> Result<Option<String>> {
        let span = debug_span!("platform.clipboard.read_text");
        span.in_scope(|| {
            let ctx = self
                .inner
                .lock()
                .map_err(|_| anyhow!("clipboard context lock poisoned"))?;

            if !ctx.has(ContentFormat::Text) {
                debug!("clipboard holds no text");
                return Ok(None);
            }

            let text = map_clipboard_err(ctx.get_text())?;
            debug!(len = text.len(), "read clipboard text");
            Ok(Some(text))
        })
    }

    fn write_text(&self, text: String) -> Result<()> {
        let span = debug_span!("platform.clipboard.write_text", len = text.len());
        span.in_scope(|| {
            let ctx = self
                .inner
                .lock()
                .map_err(|_| anyhow!("clipboard context lock poisoned"))?;
            map_clipboard_err(ctx.set_text(text))?;

            debug!("wrote clipboard text");
            Ok(())
        })
    }
}
