//! Read-only queries.
//!
//! None of these allocate except [`first_or`] / [`last_or`], which clone the
//! element they return.

/// Returns `true` if every element satisfies the predicate.
///
/// An empty slice vacuously satisfies any predicate.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::all;
///
/// assert!(all(&[2, 4, 6], |number| number % 2 == 0));
/// assert!(all(&[] as &[i32], |_| false));
/// ```
pub fn all<T, F>(elements: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    elements.iter().all(predicate)
}

/// Returns `true` if at least one element satisfies the predicate.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::any;
///
/// assert!(any(&[1, 2, 3], |number| *number > 2));
/// assert!(!any(&[] as &[i32], |_| true));
/// ```
pub fn any<T, F>(elements: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    elements.iter().any(predicate)
}

/// Returns `true` if `value` occurs in the slice.
pub fn contains<T: PartialEq>(elements: &[T], value: &T) -> bool {
    elements.iter().any(|element| element == value)
}

/// Returns the first element, or `None` for an empty slice.
pub const fn first<T>(elements: &[T]) -> Option<&T> {
    elements.first()
}

/// Returns a clone of the first element, or `default` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::first_or;
///
/// assert_eq!(first_or(&["foo", "bar"], "none"), "foo");
/// assert_eq!(first_or(&[] as &[&str], "none"), "none");
/// ```
pub fn first_or<T: Clone>(elements: &[T], default: T) -> T {
    elements.first().cloned().unwrap_or(default)
}

/// Returns the last element, or `None` for an empty slice.
pub const fn last<T>(elements: &[T]) -> Option<&T> {
    elements.last()
}

/// Returns a clone of the last element, or `default` for an empty slice.
pub fn last_or<T: Clone>(elements: &[T], default: T) -> T {
    elements.last().cloned().unwrap_or(default)
}

/// Returns the index of the first element satisfying the predicate.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::find_first_using;
///
/// let words = ["apple", "banana", "cherry"];
/// assert_eq!(find_first_using(&words, |word| word.starts_with('b')), Some(1));
/// assert_eq!(find_first_using(&words, |word| word.is_empty()), None);
/// ```
pub fn find_first_using<T, F>(elements: &[T], predicate: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    elements.iter().position(predicate)
}

/// Returns `true` if both slices hold equal elements in the same order.
pub fn equals<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    left == right
}

/// Folds the slice from left to right, seeding the fold with the first
/// element.
///
/// An empty slice reduces to `T::default()` and a single element reduces to
/// itself without calling `function`.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3, 4], |accumulator, element| accumulator * element), 24);
/// assert_eq!(reduce(&[] as &[i32], |accumulator, element| accumulator + element), 0);
/// ```
pub fn reduce<T, F>(elements: &[T], function: F) -> T
where
    T: Clone + Default,
    F: FnMut(T, &T) -> T,
{
    match elements.split_first() {
        Some((head, tail)) => tail.iter().fold(head.clone(), function),
        None => T::default(),
    }
}

/// Calls `function` on every element in order.
pub fn each<T, F>(elements: &[T], function: F)
where
    F: FnMut(&T),
{
    elements.iter().for_each(function);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], true)]
    #[case(&[2, 4], true)]
    #[case(&[2, 3], false)]
    fn test_all_even(#[case] elements: &[i32], #[case] expected: bool) {
        assert_eq!(all(elements, |number| number % 2 == 0), expected);
    }

    #[rstest]
    #[case(&[], false)]
    #[case(&[1, 3], false)]
    #[case(&[1, 4], true)]
    fn test_any_even(#[case] elements: &[i32], #[case] expected: bool) {
        assert_eq!(any(elements, |number| number % 2 == 0), expected);
    }

    #[rstest]
    fn test_contains_float() {
        assert!(contains(&[1.5, 2.5], &2.5));
        assert!(!contains(&[1.5, 2.5], &3.5));
        assert!(!contains(&[] as &[f64], &1.5));
    }

    #[rstest]
    fn test_first_and_last_on_empty() {
        let empty: &[i32] = &[];
        assert_eq!(first(empty), None);
        assert_eq!(last(empty), None);
        assert_eq!(first_or(empty, 7), 7);
        assert_eq!(last_or(empty, 7), 7);
    }

    #[rstest]
    fn test_first_and_last() {
        let elements = [3, 4, 5];
        assert_eq!(first(&elements), Some(&3));
        assert_eq!(last(&elements), Some(&5));
        assert_eq!(last_or(&elements, 0), 5);
    }

    #[rstest]
    fn test_equals_treats_empty_slices_alike() {
        let from_vec: Vec<i32> = Vec::new();
        assert!(equals(&from_vec, &[]));
        assert!(!equals(&[1, 2], &[2, 1]));
    }

    #[rstest]
    fn test_reduce_single_element_skips_function() {
        let result = reduce(&[42], |_, _| panic!("must not be called"));
        assert_eq!(result, 42);
    }

    #[rstest]
    fn test_reduce_strings() {
        let words = ["a".to_string(), "b".to_string(), "c".to_string()];
        let joined = reduce(&words, |accumulator, element| accumulator + element);
        assert_eq!(joined, "abc");
    }

    #[rstest]
    fn test_each_visits_in_order() {
        let mut visited = Vec::new();
        each(&[1, 2, 3], |element| visited.push(*element));
        assert_eq!(visited, vec![1, 2, 3]);
    }
}
