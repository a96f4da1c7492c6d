use std::collections::HashSet;
use std::hash::Hash;

/// Removes duplicates from a slice based on a hashable derived key, keeping
/// the first element for each distinct key in first-occurrence order.
///
/// `key_of` is invoked exactly once per item, in slice order.
///
/// # Example
/// ```
/// use distinct::dedup_hashed_by;
///
/// let words = vec!["apple", "apricot", "banana", "blueberry"];
/// let by_first_letter = dedup_hashed_by(&words, |word| word.chars().next());
/// assert_eq!(by_first_letter, vec!["apple", "banana"]);
/// ```
pub fn dedup_hashed_by<T, K, F>(items: &[T], mut key_of: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen: HashSet<K> = HashSet::new();

    items
        .iter()
        .filter(|item| seen.insert(key_of(item)))
        .cloned()
        .collect()
}
