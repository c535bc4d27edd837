//! Extremes and counted selection.
//!
//! Counts are signed so that callers can pass computed values without
//! pre-validating them: a count of zero or less selects nothing and a count
//! beyond the length selects everything.

use super::total_order;

/// Returns the smallest element, or `T::default()` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use slicekit::ordered::min;
///
/// assert_eq!(min(&[3, -1, 2]), -1);
/// assert_eq!(min(&[] as &[i32]), 0);
/// ```
pub fn min<T: PartialOrd + Clone + Default>(elements: &[T]) -> T {
    elements
        .iter()
        .min_by(|left, right| total_order(*left, *right))
        .cloned()
        .unwrap_or_default()
}

/// Returns the largest element, or `T::default()` for an empty slice.
///
/// NaN values are ordered last and are therefore picked when present.
pub fn max<T: PartialOrd + Clone + Default>(elements: &[T]) -> T {
    elements
        .iter()
        .max_by(|left, right| total_order(*left, *right))
        .cloned()
        .unwrap_or_default()
}

/// Returns the first `count` elements.
///
/// A `count` of zero or less yields an empty result; a `count` at or beyond
/// the length yields every element.
///
/// # Examples
///
/// ```rust
/// use slicekit::ordered::top;
///
/// assert_eq!(top(&[1.23, 2.34], -1), Vec::<f64>::new());
/// assert_eq!(top(&[1.23, 2.34], 0), Vec::<f64>::new());
/// assert_eq!(top(&[1.23, 2.34], 1), vec![1.23]);
/// assert_eq!(top(&[1.23, 2.34], 3), vec![1.23, 2.34]);
/// ```
pub fn top<T: Clone>(elements: &[T], count: isize) -> Vec<T> {
    elements[..clamp_count(count, elements.len())].to_vec()
}

/// Returns the last `count` elements, last element first.
///
/// Counts are clamped the same way as in [`top`].
///
/// # Examples
///
/// ```rust
/// use slicekit::ordered::bottom;
///
/// assert_eq!(bottom(&[1, 2, 3], 2), vec![3, 2]);
/// assert_eq!(bottom(&[1, 2, 3], 10), vec![3, 2, 1]);
/// ```
pub fn bottom<T: Clone>(elements: &[T], count: isize) -> Vec<T> {
    let taken = clamp_count(count, elements.len());
    elements.iter().rev().take(taken).cloned().collect()
}

/// Returns every element except the first `count`.
///
/// A `count` of zero or less keeps everything; a `count` at or beyond the
/// length drops everything.
///
/// # Examples
///
/// ```rust
/// use slicekit::ordered::drop_top;
///
/// assert_eq!(drop_top(&[1, 2, 3], 1), vec![2, 3]);
/// assert_eq!(drop_top(&[1, 2, 3], -5), vec![1, 2, 3]);
/// assert_eq!(drop_top(&[1, 2, 3], 5), Vec::<i32>::new());
/// ```
pub fn drop_top<T: Clone>(elements: &[T], count: isize) -> Vec<T> {
    elements[clamp_count(count, elements.len())..].to_vec()
}

/// Maps a signed count onto `0..=length`.
pub(crate) fn clamp_count(count: isize, length: usize) -> usize {
    usize::try_from(count).map_or(0, |count| count.min(length))
}
