//! History change notifications.

/// Signal published after the history sequence changed.
///
/// Observers treat it as "re-read current state"; `len` is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryEvent {
    Changed { len: usize },
}
