//! Uniqueness.

use std::hash::Hash;

use super::hasher::table_set;

/// Returns each distinct element once, in unspecified order.
///
/// The order comes from hash-set iteration and may differ between calls
/// with different hashers or between processes. Use [`unique_stable`] for a
/// deterministic order.
///
/// # Examples
///
/// ```rust
/// use ordered_float::OrderedFloat;
/// use slicekit::set::unique;
///
/// let readings = [OrderedFloat(12.789), OrderedFloat(-13.2), OrderedFloat(12.789)];
/// let mut distinct = unique(&readings);
/// distinct.sort();
/// assert_eq!(distinct, vec![OrderedFloat(-13.2), OrderedFloat(12.789)]);
/// ```
pub fn unique<T>(elements: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = table_set(elements.len());
    seen.extend(elements.iter());
    seen.into_iter().cloned().collect()
}

/// Returns each distinct element once, keeping first occurrences in input
/// order.
///
/// # Examples
///
/// ```rust
/// use slicekit::set::unique_stable;
///
/// assert_eq!(unique_stable(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn unique_stable<T>(elements: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = table_set(elements.len());
    elements
        .iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

/// Returns `true` if no element occurs more than once.
///
/// # Examples
///
/// ```rust
/// use slicekit::set::are_unique;
///
/// assert!(are_unique(&[1, 2, 3]));
/// assert!(!are_unique(&[1, 2, 1]));
/// assert!(are_unique(&[] as &[i32]));
/// ```
pub fn are_unique<T>(elements: &[T]) -> bool
where
    T: Eq + Hash,
{
    let mut seen = table_set(elements.len());
    elements.iter().all(|element| seen.insert(element))
}
