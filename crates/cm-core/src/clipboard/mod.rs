mod entry;
mod hash;
mod outcome;

pub use entry::ClipboardEntry;
pub use hash::{compute_entry_hash, serialize_timestamp};
pub use outcome::RecordOutcome;
