/// Removes duplicates from a slice based on a derived key that only supports
/// equality comparison, keeping the first element for each distinct key.
///
/// `key_of` is invoked exactly once per item, in slice order. Keys are
/// compared pairwise against every previously kept key.
///
/// # Example
/// ```
/// use distinct::dedup_pairwise_by;
///
/// let readings = vec![("a", 0.25), ("b", 0.25), ("c", 0.75)];
/// let by_level = dedup_pairwise_by(&readings, |reading| reading.1);
/// assert_eq!(by_level, vec![("a", 0.25), ("c", 0.75)]);
/// ```
pub fn dedup_pairwise_by<T, K, F>(items: &[T], mut key_of: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut seen_keys: Vec<K> = Vec::new();
    let mut result: Vec<T> = Vec::new();

    for item in items {
        let key = key_of(item);
        if !seen_keys.contains(&key) {
            seen_keys.push(key);
            result.push(item.clone());
        }
    }

    result
}
