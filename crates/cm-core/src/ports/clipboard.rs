//! Clipboard port - abstracts the OS clipboard
//!
//! Only text is modelled. Any platform clipboard API that can read and
//! replace the current text payload satisfies this contract.

use anyhow::Result;

/// Clipboard source - abstracts local clipboard access
///
/// The clipboard is shared OS state: another application may replace its
/// content between any two calls.
pub trait ClipboardSourcePort: Send + Sync {
    /// Read the current text payload.
    ///
    /// `Ok(None)` when the clipboard holds no text. `Err` for transient
    /// read failures; callers skip the sample and try again later.
    fn read_text(&self) -> Result<Option<String>>;

    /// Replace the clipboard content unconditionally.
    fn write_text(&self, text: String) -> Result<()>;
}
