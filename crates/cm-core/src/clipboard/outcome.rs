use super::entry::ClipboardEntry;

/// Result of offering a candidate text to the history store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// Appended and persisted.
    Recorded(ClipboardEntry),

    /// Appended in memory; the save failed and is reported as a warning.
    RecordedUnpersisted { entry: ClipboardEntry, error: String },

    /// Candidate equals the content of the latest entry.
    Unchanged,

    /// The clock went backwards relative to the latest entry.
    RejectedNonMonotonic,
}

impl RecordOutcome {
    /// The appended entry, if any.
    pub fn entry(&self) -> Option<&ClipboardEntry> {
        match self {
            RecordOutcome::Recorded(entry) | RecordOutcome::RecordedUnpersisted { entry, .. } => {
                Some(entry)
            }
            RecordOutcome::Unchanged | RecordOutcome::RejectedNonMonotonic => None,
        }
    }

    pub fn into_entry(self) -> Option<ClipboardEntry> {
        match self {
            RecordOutcome::Recorded(entry) | RecordOutcome::RecordedUnpersisted { entry, .. } => {
                Some(entry)
            }
            RecordOutcome::Unchanged | RecordOutcome::RejectedNonMonotonic => None,
        }
    }

    pub fn persistence_warning(&self) -> Option<&str> {
        match self {
            RecordOutcome::RecordedUnpersisted { error, .. } => Some(error),
            _ => None,
        }
    }
}
