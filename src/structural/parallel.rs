//! Parallel counterparts of [`map`](super::map) and [`filter`](super::filter).
//!
//! Results are collected through rayon's indexed iterators, so element order
//! matches the sequential functions exactly.

use rayon::prelude::*;

/// Parallel version of [`map`](super::map).
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::par_map;
///
/// let squares = par_map(&[1, 2, 3, 4], |number| number * number);
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn par_map<T, U, F>(elements: &[T], function: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    elements.par_iter().map(function).collect()
}

/// Parallel version of [`filter`](super::filter).
pub fn par_filter<T, F>(elements: &[T], predicate: F) -> Vec<T>
where
    T: Clone + Send + Sync,
    F: Fn(&T) -> bool + Sync + Send,
{
    elements
        .par_iter()
        .filter(|element| predicate(element))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_par_map_matches_sequential() {
        let numbers: Vec<i64> = (0..10_000).collect();
        assert_eq!(
            par_map(&numbers, |number| number * 3),
            super::super::map(&numbers, |number| number * 3)
        );
    }

    #[rstest]
    fn test_par_filter_preserves_order() {
        let numbers: Vec<i64> = (0..10_000).collect();
        assert_eq!(
            par_filter(&numbers, |number| number % 7 == 0),
            super::super::filter(&numbers, |number| number % 7 == 0)
        );
    }
}
