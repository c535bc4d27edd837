//! Shape-changing transforms.
//!
//! Each function returns a new `Vec`; the input slice is only read.

use crate::error::SliceError;

/// Returns the elements that satisfy the predicate, in order.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::filter;
///
/// let words = ["foo", "bar", "baz"];
/// assert_eq!(filter(&words, |word| word.starts_with('b')), vec!["bar", "baz"]);
/// ```
pub fn filter<T, F>(elements: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    elements
        .iter()
        .filter(|element| predicate(element))
        .cloned()
        .collect()
}

/// Returns the elements that do not satisfy the predicate, in order.
pub fn filter_not<T, F>(elements: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    filter(elements, |element| !predicate(element))
}

/// Applies `function` to every element, producing a new element type.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::map;
///
/// assert_eq!(map(&[1, 2, 3], |number| number * 10), vec![10, 20, 30]);
/// ```
pub fn map<T, U, F>(elements: &[T], function: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    elements.iter().map(function).collect()
}

/// Concatenates nested slices into one.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::flatten;
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// assert_eq!(flatten(&nested), vec![1, 2, 3]);
/// ```
pub fn flatten<T, S>(nested: &[S]) -> Vec<T>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let capacity = nested.iter().map(|inner| inner.as_ref().len()).sum();
    let mut flattened = Vec::with_capacity(capacity);
    for inner in nested {
        flattened.extend_from_slice(inner.as_ref());
    }
    flattened
}

/// Drops the leading elements that satisfy the predicate and returns the
/// rest.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::drop_while;
///
/// assert_eq!(drop_while(&[1, 2, 5, 1], |number| *number < 3), vec![5, 1]);
/// ```
pub fn drop_while<T, F>(elements: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let start = elements
        .iter()
        .position(|element| !predicate(element))
        .unwrap_or(elements.len());
    elements[start..].to_vec()
}

/// Returns the elements in reverse order.
pub fn reverse<T: Clone>(elements: &[T]) -> Vec<T> {
    elements.iter().rev().cloned().collect()
}

/// Rotates the elements circularly by `positions`.
///
/// Positive values rotate right (the last element moves to the front),
/// negative values rotate left. Any magnitude is accepted; it is taken modulo
/// the length.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::rotate;
///
/// assert_eq!(rotate(&[1, 2, 3, 4], 1), vec![4, 1, 2, 3]);
/// assert_eq!(rotate(&[1, 2, 3, 4], -1), vec![2, 3, 4, 1]);
/// assert_eq!(rotate(&[1, 2, 3, 4], 6), vec![3, 4, 1, 2]);
/// ```
pub fn rotate<T: Clone>(elements: &[T], positions: isize) -> Vec<T> {
    let mut rotated = elements.to_vec();
    if rotated.len() < 2 {
        return rotated;
    }
    // A slice never holds more than isize::MAX elements.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let shift = positions.rem_euclid(rotated.len() as isize) as usize;
    rotated.rotate_right(shift);
    rotated
}

/// Inserts `values` before position `index`.
///
/// An index at or past the end appends instead.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::insert;
///
/// assert_eq!(insert(&[1, 4], 1, &[2, 3]), vec![1, 2, 3, 4]);
/// assert_eq!(insert(&[1, 2], 10, &[3]), vec![1, 2, 3]);
/// ```
pub fn insert<T: Clone>(elements: &[T], index: usize, values: &[T]) -> Vec<T> {
    let split = index.min(elements.len());
    let mut inserted = Vec::with_capacity(elements.len() + values.len());
    inserted.extend_from_slice(&elements[..split]);
    inserted.extend_from_slice(values);
    inserted.extend_from_slice(&elements[split..]);
    inserted
}

/// Removes the elements at the given indices.
///
/// Duplicate and out-of-range indices are ignored.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::delete;
///
/// assert_eq!(delete(&["a", "b", "c", "d"], &[0, 2, 2, 9]), vec!["b", "d"]);
/// ```
pub fn delete<T: Clone>(elements: &[T], indices: &[usize]) -> Vec<T> {
    let mut removed = vec![false; elements.len()];
    for &index in indices {
        if let Some(flag) = removed.get_mut(index) {
            *flag = true;
        }
    }
    elements
        .iter()
        .zip(removed)
        .filter(|(_, is_removed)| !is_removed)
        .map(|(element, _)| element.clone())
        .collect()
}

/// Returns a new `Vec` holding `elements` followed by `values`.
///
/// The result never shares storage with `elements`, so pushing onto two
/// results appended from the same input can never interfere.
pub fn append<T: Clone>(elements: &[T], values: &[T]) -> Vec<T> {
    let mut appended = Vec::with_capacity(elements.len() + values.len());
    appended.extend_from_slice(elements);
    appended.extend_from_slice(values);
    appended
}

/// Returns a new `Vec` holding `elements` followed by every slice in
/// `slices`.
pub fn extend<T: Clone>(elements: &[T], slices: &[&[T]]) -> Vec<T> {
    let capacity = elements.len() + slices.iter().map(|slice| slice.len()).sum::<usize>();
    let mut extended = Vec::with_capacity(capacity);
    extended.extend_from_slice(elements);
    for slice in slices {
        extended.extend_from_slice(slice);
    }
    extended
}

/// Returns the elements in `start..end`.
///
/// - A negative bound, or `start >= end`, yields an empty result.
/// - Positions at or past the end of `elements` are filled with
///   `T::default()`, so the result always has `end - start` elements.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::sub_slice;
///
/// assert_eq!(sub_slice(&[1, 2, 3], 1, 3), vec![2, 3]);
/// assert_eq!(sub_slice(&[1, 2, 3], 2, 5), vec![3, 0, 0]);
/// assert_eq!(sub_slice(&[1, 2, 3], -1, 2), Vec::<i32>::new());
/// assert_eq!(sub_slice(&[1, 2, 3], 2, 2), Vec::<i32>::new());
/// ```
///
/// # Panics
///
/// Panics with a capacity overflow if `end - start` elements of `T` cannot
/// be allocated, as `Vec::resize` does.
pub fn sub_slice<T: Clone + Default>(elements: &[T], start: isize, end: isize) -> Vec<T> {
    let (Ok(start), Ok(end)) = (usize::try_from(start), usize::try_from(end)) else {
        return Vec::new();
    };
    if start >= end {
        return Vec::new();
    }
    let mut sub = Vec::with_capacity((end - start).min(elements.len()));
    if start < elements.len() {
        sub.extend_from_slice(&elements[start..end.min(elements.len())]);
    }
    sub.resize(end - start, T::default());
    sub
}

/// Splits the elements into consecutive chunks of `size`; the last chunk may
/// be shorter.
///
/// # Errors
///
/// Returns [`SliceError::InvalidChunkSize`] if `size` is zero.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::chunk;
///
/// let chunks = chunk(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// assert!(chunk(&[1, 2, 3], 0).is_err());
/// ```
pub fn chunk<T: Clone>(elements: &[T], size: usize) -> Result<Vec<Vec<T>>, SliceError> {
    if size == 0 {
        return Err(SliceError::InvalidChunkSize { size });
    }
    Ok(elements.chunks(size).map(<[T]>::to_vec).collect())
}

/// Pairs up elements of both slices; the result is as long as the shorter
/// input.
pub fn zip<T: Clone, U: Clone>(left: &[T], right: &[U]) -> Vec<(T, U)> {
    left.iter().cloned().zip(right.iter().cloned()).collect()
}

/// Splits off the last element.
///
/// Returns the removed element (if any) and the remaining elements.
///
/// # Examples
///
/// ```rust
/// use slicekit::structural::pop;
///
/// assert_eq!(pop(&[1, 2, 3]), (Some(3), vec![1, 2]));
/// assert_eq!(pop(&[] as &[i32]), (None, vec![]));
/// ```
pub fn pop<T: Clone>(elements: &[T]) -> (Option<T>, Vec<T>) {
    match elements.split_last() {
        Some((last, rest)) => (Some(last.clone()), rest.to_vec()),
        None => (None, Vec::new()),
    }
}

/// Splits off the first element.
///
/// Returns the removed element (if any) and the remaining elements.
pub fn shift<T: Clone>(elements: &[T]) -> (Option<T>, Vec<T>) {
    match elements.split_first() {
        Some((first, rest)) => (Some(first.clone()), rest.to_vec()),
        None => (None, Vec::new()),
    }
}

/// Returns a new `Vec` holding `values` followed by `elements`.
pub fn unshift<T: Clone>(elements: &[T], values: &[T]) -> Vec<T> {
    append(values, elements)
}
