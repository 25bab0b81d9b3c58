use chrono::{DateTime, SubsecRound, Utc};

/// Current UTC time, truncated to microseconds so that stored and
/// returned timestamps compare equal after a round trip.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Generate a document id.
///
/// UUID v7 in simple (32 hex chars) form: time-ordered, so the store's
/// key order is insertion order.
pub fn new_object_id() -> String {
    uuid::Uuid::now_v7().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_is_hex() {
        let id = new_object_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_object_ids_sort_by_creation() {
        let ids: Vec<String> = (0..50).map(|_| new_object_id()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
