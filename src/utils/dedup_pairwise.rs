/// Removes duplicates from a slice of items that only support equality
/// comparison, preserving the order of first occurrences.
///
/// Each candidate is compared against every item already kept, so a run with
/// `m` distinct items costs O(m) comparisons per candidate. Use
/// [`dedup_hashed`](crate::dedup_hashed) when the element type is hashable.
///
/// # Example
/// ```
/// use distinct::dedup_pairwise;
///
/// let points = vec![(0.5, 1.0), (2.0, 3.0), (0.5, 1.0)];
/// assert_eq!(dedup_pairwise(&points), vec![(0.5, 1.0), (2.0, 3.0)]);
/// ```
pub fn dedup_pairwise<T>(items: &[T]) -> Vec<T>
where
    T: Clone + PartialEq,
{
    let mut result: Vec<T> = Vec::new();

    for item in items {
        // The output doubles as the seen-list: it holds exactly the distinct
        // items accepted so far.
        if !result.contains(item) {
            result.push(item.clone());
        }
    }

    result
}
