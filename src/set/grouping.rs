//! Counting and grouping.

use std::collections::HashMap;
use std::hash::Hash;

use super::hasher::table;

/// Counts how often each distinct element occurs.
///
/// # Examples
///
/// ```rust
/// use slicekit::set::group;
///
/// let counts = group(&["a", "b", "a"]);
/// assert_eq!(counts["a"], 2);
/// assert_eq!(counts["b"], 1);
/// ```
pub fn group<T>(elements: &[T]) -> HashMap<T, usize>
where
    T: Eq + Hash + Clone,
{
    let mut counts = HashMap::with_capacity(elements.len());
    for element in elements {
        *counts.entry(element.clone()).or_insert(0) += 1;
    }
    counts
}

/// Buckets elements by the key `key_function` derives from them.
///
/// Elements keep their input order within each bucket.
///
/// # Examples
///
/// ```rust
/// use slicekit::set::group_by;
///
/// let words = ["apple", "avocado", "banana"];
/// let by_initial = group_by(&words, |word| word.chars().next());
/// assert_eq!(by_initial[&Some('a')], vec!["apple", "avocado"]);
/// assert_eq!(by_initial[&Some('b')], vec!["banana"]);
/// ```
pub fn group_by<T, K, F>(elements: &[T], mut key_function: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for element in elements {
        groups
            .entry(key_function(element))
            .or_default()
            .push(element.clone());
    }
    groups
}

/// Returns every element that occurs most often, in unspecified order.
///
/// An empty slice has no mode.
///
/// # Examples
///
/// ```rust
/// use slicekit::set::mode;
///
/// assert_eq!(mode(&[1, 2, 2, 3]), vec![2]);
///
/// let mut tied = mode(&[1, 1, 2, 2, 3]);
/// tied.sort_unstable();
/// assert_eq!(tied, vec![1, 2]);
/// ```
pub fn mode<T>(elements: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut counts = table(elements.len());
    for element in elements {
        *counts.entry(element).or_insert(0_usize) += 1;
    }

    let highest = counts.values().copied().max().unwrap_or(0);
    counts
        .into_iter()
        .filter(|(_, count)| *count == highest)
        .map(|(element, _)| element.clone())
        .collect()
}
