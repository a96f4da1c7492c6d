use std::collections::HashSet;
use std::hash::Hash;

/// Removes duplicates from a slice of hashable items, preserving the order
/// of first occurrences.
///
/// This is the statically-typed fast path: when the element type is `Eq +
/// Hash` the whole run is a single pass over a hash set, with no deep
/// comparisons.
///
/// # Arguments
/// * `items` - The slice to remove duplicates from. Never mutated.
///
/// # Returns
/// * A new `Vec` containing the first occurrence of each distinct item.
///
/// # Example
/// ```
/// use distinct::dedup_hashed;
///
/// let items = vec!["apple", "banana", "apple", "orange", "banana"];
/// assert_eq!(dedup_hashed(&items), vec!["apple", "banana", "orange"]);
/// ```
pub fn dedup_hashed<T>(items: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash,
{
    let mut seen: HashSet<T> = HashSet::new();

    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}
