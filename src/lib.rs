pub mod models;
pub use models::{Deduplicator, Error, Value};
pub mod types;
mod utils;
pub use types::{Array, Object};
pub use utils::{dedup_hashed, dedup_hashed_by, dedup_pairwise, dedup_pairwise_by};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Returns a new sequence with all duplicate values removed, keeping the
/// first occurrence of each distinct value in its original position.
///
/// Scalars are duplicates when identical under set-membership equality
/// (`NaN` equals `NaN`, `+0.0` equals `-0.0`); arrays and objects are
/// duplicates when deeply structurally equal. The input is never mutated.
///
/// # Example
/// ```
/// use distinct::{dedup, Value};
///
/// let values: Vec<Value> = [1_i64, 2, 2, 3, 4, 4, 5].map(Value::from).to_vec();
/// let expected: Vec<Value> = [1_i64, 2, 3, 4, 5].map(Value::from).to_vec();
/// assert_eq!(dedup(&values), expected);
/// ```
pub fn dedup(values: &[Value]) -> Vec<Value> {
    let mut seen = Deduplicator::new();

    values
        .iter()
        .filter(|value| seen.insert(value))
        .cloned()
        .collect()
}

/// Returns a new sequence with duplicates removed based on a derived key,
/// keeping the first element (never the key) for each distinct key.
///
/// `key_of` is invoked exactly once per element, in input order, even when
/// its result turns out to be a duplicate key. Scalar keys use the fast
/// set-membership path; composite keys use deep structural equality.
///
/// # Example
/// ```
/// use distinct::{dedup_by, Value};
///
/// let values: Vec<Value> = [1_i64, 2, 2, 3, 4, 4, 5].map(Value::from).to_vec();
/// let evens_and_odds = dedup_by(&values, |value| match value {
///     Value::Number(n) => Value::from(n % 2.0),
///     other => other.clone(),
/// });
/// assert_eq!(evens_and_odds, vec![Value::from(1_i64), Value::from(2_i64)]);
/// ```
pub fn dedup_by<F>(values: &[Value], mut key_of: F) -> Vec<Value>
where
    F: FnMut(&Value) -> Value,
{
    let mut seen = Deduplicator::new();
    let mut result = Vec::new();

    for value in values {
        let key = key_of(value);
        if seen.insert(&key) {
            result.push(value.clone());
        }
    }

    result
}

/// Fallible form of [`dedup_by`].
///
/// The first extractor error aborts the call and propagates unmodified; no
/// partial result is returned. Elements before the failing one have already
/// had their keys extracted, matching the once-per-element, in-order
/// invocation guarantee of [`dedup_by`].
pub fn try_dedup_by<F, E>(values: &[Value], mut key_of: F) -> Result<Vec<Value>, E>
where
    F: FnMut(&Value) -> Result<Value, E>,
{
    let mut seen = Deduplicator::new();
    let mut result = Vec::new();

    for value in values {
        let key = key_of(value)?;
        if seen.insert(&key) {
            result.push(value.clone());
        }
    }

    Ok(result)
}
