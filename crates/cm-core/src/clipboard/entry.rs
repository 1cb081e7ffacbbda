use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::hash::compute_entry_hash;

/// One recorded clipboard sample.
///
/// The field names are the on-disk schema of the history file; any other
/// shape is rejected when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipboardEntry {
    content: String,
    date: DateTime<Utc>,
    hash: String,
}

impl ClipboardEntry {
    /// Build an entry and compute its identity hash once.
    pub fn new(content: impl Into<String>, date: DateTime<Utc>) -> Self {
        let content = content.into();
        let hash = compute_entry_hash(&content, &date);
        Self {
            content,
            date,
            hash,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Whether the stored hash still matches the stored fields.
    ///
    /// Files written by older builds may carry hashes computed with another
    /// timestamp encoding; loading does not reject those.
    pub fn verify_hash(&self) -> bool {
        compute_entry_hash(&self.content, &self.date) == self.hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_entry_carries_hash_of_its_fields() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let entry = ClipboardEntry::new("hello", date);

        assert_eq!(entry.content(), "hello");
        assert_eq!(entry.date(), date);
        assert_eq!(entry.hash(), compute_entry_hash("hello", &date));
        assert!(entry.verify_hash());
    }

    #[test]
    fn serializes_to_content_date_hash_object() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let entry = ClipboardEntry::new("x", date);

        let value = serde_json::to_value(&entry).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["content"], "x");
        assert_eq!(obj["date"], "2024-05-01T12:00:00Z");
        assert_eq!(obj["hash"], entry.hash());
    }

    #[test]
    fn rejects_unknown_fields() {
        let json = r#"{"content":"x","date":"2024-05-01T12:00:00Z","hash":"00","extra":1}"#;
        assert!(serde_json::from_str::<ClipboardEntry>(json).is_err());
    }

    #[test]
    fn accepts_foreign_hash_without_rewriting_it() {
        let json = r#"{"content":"x","date":"2024-05-01T12:00:00Z","hash":"abc"}"#;
        let entry: ClipboardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.hash(), "abc");
        assert!(!entry.verify_hash());
    }
}
