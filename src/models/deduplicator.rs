use crate::models::{ScalarKey, Value};
use std::collections::HashSet;

/// Tracks which values have already been seen while deduplicating a sequence.
///
/// Scalar values are recorded in a hash set for O(1) amortized membership
/// tests. Composite values are recorded in a list and each new candidate is
/// compared against every previously accepted one with deep structural
/// equality. No structural hashing of composites is attempted, so a run with
/// `m` distinct composites costs O(m) comparisons per new composite; that
/// trade-off keeps equality semantics exact (key-order-insensitive objects,
/// order-sensitive arrays, NaN-self-equal numbers at any depth).
///
/// All state is local to one deduplication call; nothing is shared or reused
/// across calls.
pub struct Deduplicator {
    scalar_seen: HashSet<ScalarKey>,
    complex_seen: Vec<Value>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self {
            scalar_seen: HashSet::new(),
            complex_seen: Vec::new(),
        }
    }

    /// Records a value, returning `true` if it had not been seen before.
    ///
    /// Mirrors `HashSet::insert`: a `true` result means the caller is looking
    /// at the first sighting and should keep the corresponding element.
    pub fn insert(&mut self, value: &Value) -> bool {
        match value.scalar_key() {
            Some(key) => self.scalar_seen.insert(key),
            None => {
                if self.complex_seen.iter().any(|seen| seen == value) {
                    return false;
                }
                self.complex_seen.push(value.clone());
                true
            }
        }
    }
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_first_sighting_only() {
        let mut seen = Deduplicator::new();

        assert!(seen.insert(&Value::from(1_i64)));
        assert!(!seen.insert(&Value::from(1_i64)));
        assert!(seen.insert(&Value::from("1")));
    }

    #[test]
    fn test_insert_uses_deep_equality_for_composites() {
        let mut seen = Deduplicator::new();

        let first = Value::from_json_str(r#"{"id": 1, "name": "A"}"#).unwrap();
        let reordered = Value::from_json_str(r#"{"name": "A", "id": 1}"#).unwrap();

        assert!(seen.insert(&first));
        assert!(!seen.insert(&reordered));
    }
}
