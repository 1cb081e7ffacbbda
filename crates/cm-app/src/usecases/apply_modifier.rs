use std::sync::Arc;

use tracing::{debug, error, info_span, warn, Instrument};

use cm_core::ports::{ClipboardSourcePort, TextTransformPort};

use crate::history::HistoryStore;

/// Use case for transforming a text and putting the result on the clipboard.
///
/// The transform never fails from the caller's view; a broken transform
/// yields the input unchanged. On a successful clipboard write the result
/// is recorded right away, so the next poll tick sees an adjacent repeat.
pub struct ApplyModifier {
    transform: Arc<dyn TextTransformPort>,
    clipboard: Arc<dyn ClipboardSourcePort>,
    store: Arc<HistoryStore>,
}

impl ApplyModifier {
    pub fn new(
        transform: Arc<dyn TextTransformPort>,
        clipboard: Arc<dyn ClipboardSourcePort>,
        store: Arc<HistoryStore>,
    ) -> Self {
        Self {
            transform,
            clipboard,
            store,
        }
    }

    pub fn transform_name(&self) -> &str {
        self.transform.name()
    }

    /// Transform `input`, write the result to the clipboard and return it.
    pub async fn execute(&self, input: String) -> String {
        let span = info_span!(
            "usecase.apply_modifier.execute",
            modifier = %self.transform.name(),
            input_len = input.len(),
        );

        async move {
            let transform = Arc::clone(&self.transform);
            let fallback = input.clone();

            // Script evaluation is CPU-bound and may run up to its time budget.
            let output = match tokio::task::spawn_blocking(move || transform.apply(&input)).await
            {
                Ok(output) => output,
                Err(err) => {
                    error!(error = %err, "transform worker failed, passing input through");
                    fallback
                }
            };

            match self.clipboard.write_text(output.clone()) {
                Ok(()) => {
                    let outcome = self.store.record_if_changed(output.clone()).await;
                    debug!(recorded = outcome.entry().is_some(), "modifier output written");
                }
                Err(err) => {
                    warn!(error = %format!("{err:#}"), "failed to write modifier output to clipboard");
                }
            }

            output
        }
        .instrument(span)
        .await
    }
}
