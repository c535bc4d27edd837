//! Sorting into a new `Vec`.

use std::cmp::Ordering;

use super::total_order;

/// Returns the elements in ascending order.
///
/// The sort is unstable; use [`sort_stable_using`] when equal elements must
/// keep their relative order.
///
/// # Examples
///
/// ```rust
/// use slicekit::ordered::sort;
///
/// assert_eq!(sort(&[3, 1, 2]), vec![1, 2, 3]);
/// assert_eq!(sort(&[0.5, -1.0]), vec![-1.0, 0.5]);
/// ```
pub fn sort<T: PartialOrd + Clone>(elements: &[T]) -> Vec<T> {
    let mut sorted = elements.to_vec();
    sorted.sort_unstable_by(total_order);
    sorted
}

/// Returns the elements ordered by `compare` (unstable).
///
/// # Examples
///
/// ```rust
/// use slicekit::ordered::sort_using;
///
/// let descending = sort_using(&[1, 3, 2], |left, right| right.cmp(left));
/// assert_eq!(descending, vec![3, 2, 1]);
/// ```
pub fn sort_using<T, F>(elements: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = elements.to_vec();
    sorted.sort_unstable_by(compare);
    sorted
}

/// Returns the elements ordered by `compare`, keeping equal elements in
/// their original relative order.
///
/// # Examples
///
/// ```rust
/// use slicekit::ordered::sort_stable_using;
///
/// let words = ["bb", "a", "cc", "d"];
/// let by_length = sort_stable_using(&words, |left, right| left.len().cmp(&right.len()));
/// assert_eq!(by_length, vec!["a", "d", "bb", "cc"]);
/// ```
pub fn sort_stable_using<T, F>(elements: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = elements.to_vec();
    sorted.sort_by(compare);
    sorted
}

/// Returns `true` if the elements are in ascending order.
///
/// Empty and single-element slices are sorted.
pub fn are_sorted<T: PartialOrd>(elements: &[T]) -> bool {
    elements
        .windows(2)
        .all(|pair| total_order(&pair[0], &pair[1]) != Ordering::Greater)
}
