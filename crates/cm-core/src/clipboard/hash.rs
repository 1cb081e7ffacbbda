use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};

/// Serialize a timestamp the same way it is persisted in the history file.
pub fn serialize_timestamp(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Compute the identity hash of an entry.
///
/// `SHA-256(content ++ serialized(date))` rendered as lowercase hex.
/// Equal contents recorded at different instants produce different hashes,
/// so this is an identity and never a dedup key.
pub fn compute_entry_hash(content: &str, date: &DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hasher.update(serialize_timestamp(date).as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).single().unwrap()
    }

    #[test]
    fn hash_is_deterministic() {
        let date = at(1_700_000_000_123);
        assert_eq!(
            compute_entry_hash("hello", &date),
            compute_entry_hash("hello", &date)
        );
    }

    #[test]
    fn hash_differs_for_same_content_at_different_times() {
        let a = compute_entry_hash("hello", &at(1_700_000_000_000));
        let b = compute_entry_hash("hello", &at(1_700_000_000_001));
        assert_ne!(a, b);
    }

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        let hash = compute_entry_hash("", &at(0));
        assert_eq!(hash.len(), 64);
        assert!(hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn hash_matches_manual_digest_of_concatenation() {
        let date = at(0);
        let expected = hex::encode(Sha256::digest(b"abc1970-01-01T00:00:00Z"));
        assert_eq!(compute_entry_hash("abc", &date), expected);
    }
}
