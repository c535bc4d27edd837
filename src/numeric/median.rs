//! Median and order statistics.

use super::primitive::Primitive;
use super::selection::select;

/// Returns the statistical median of the elements.
///
/// - An empty slice yields `T::zero()`.
/// - An odd-length slice yields its middle element in sorted order.
/// - An even-length slice yields the mean of its two middle elements,
///   computed as if in a wider type. Integer medians truncate toward zero
///   and never overflow.
///
/// The input is copied into a private work buffer which is partially
/// ordered by quickselect; the caller's slice is never reordered. Runs in
/// average linear time.
///
/// # Examples
///
/// ```rust
/// use slicekit::numeric::median;
///
/// assert_eq!(median::<f64>(&[]), 0.0);
/// assert_eq!(median(&[12.3]), 12.3);
/// assert_eq!(median(&[12.3, 4.5]), 8.4);
/// assert_eq!(median(&[2.1, 12.3, 4.5]), 4.5);
///
/// // Integer division truncates.
/// assert_eq!(median(&[1, 2]), 1);
/// assert_eq!(median(&[200_u8, 100]), 150);
/// ```
pub fn median<T: Primitive>(elements: &[T]) -> T {
    match elements {
        [] => T::zero(),
        [only] => *only,
        _ => {
            let mut work = elements.to_vec();
            let upper = work.len() / 2;
            if work.len() % 2 == 1 {
                select(&mut work, upper, upper);
                work[upper]
            } else {
                let lower = upper - 1;
                select(&mut work, lower, upper);
                work[lower].midpoint(work[upper])
            }
        }
    }
}

/// Returns the element that would sit at `index` if the slice were sorted
/// in ascending order, or `None` if `index` is out of bounds.
///
/// Uses the same selection as [`median`] and works for any ordered element
/// type, not just numbers.
///
/// # Examples
///
/// ```rust
/// use slicekit::numeric::nth_smallest;
///
/// let words = ["pear", "apple", "fig"];
/// assert_eq!(nth_smallest(&words, 0), Some("apple"));
/// assert_eq!(nth_smallest(&words, 2), Some("pear"));
/// assert_eq!(nth_smallest(&words, 3), None);
/// ```
pub fn nth_smallest<T>(elements: &[T], index: usize) -> Option<T>
where
    T: PartialOrd + Clone,
{
    if index >= elements.len() {
        return None;
    }
    let mut work = elements.to_vec();
    select(&mut work, index, index);
    Some(work.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[], 0.0)]
    #[case(&[12.3], 12.3)]
    #[case(&[12.3, 4.5], 8.4)]
    #[case(&[2.1, 12.3, 4.5], 4.5)]
    fn test_median_of_readings(#[case] elements: &[f64], #[case] expected: f64) {
        assert_eq!(median(elements), expected);
    }

    #[rstest]
    #[case::empty(&[], 0)]
    #[case::single(&[7], 7)]
    #[case::two(&[4, 10], 7)]
    #[case::odd_with_duplicates(&[5, 1, 5, 3, 5], 5)]
    #[case::sorted(&[1, 2, 3, 4, 5, 6, 7], 4)]
    #[case::reverse_sorted(&[7, 6, 5, 4, 3, 2, 1], 4)]
    #[case::all_equal(&[3, 3, 3, 3, 3, 3], 3)]
    #[case::even_truncates(&[1, 2, 3, 4], 2)]
    #[case::negative_truncates_toward_zero(&[-4, -1], -2)]
    #[case::negative_odd_sum(&[-2, -1], -1)]
    fn test_median_integers(#[case] elements: &[i64], #[case] expected: i64) {
        assert_eq!(median(elements), expected);
    }

    #[rstest]
    fn test_median_does_not_reorder_input() {
        let input = vec![9, 1, 8, 2, 7, 3];
        let _ = median(&input);
        assert_eq!(input, vec![9, 1, 8, 2, 7, 3]);
    }

    #[rstest]
    fn test_median_large_all_equal_terminates() {
        let input = vec![42_u32; 100_000];
        assert_eq!(median(&input), 42);
    }

    #[rstest]
    fn test_median_unsigned() {
        assert_eq!(median(&[10_u8, 200, 30]), 30);
    }

    #[rstest]
    fn test_median_even_near_type_maximum() {
        assert_eq!(median(&[200_u8, 100]), 150);
        assert_eq!(median(&[i32::MAX, i32::MAX - 2]), i32::MAX - 1);
        assert_eq!(median(&[i64::MIN, i64::MIN + 2, 0, i64::MIN]), i64::MIN + 1);
        assert_eq!(median(&[u64::MAX, 3, u64::MAX, 1]), u64::MAX / 2 + 2);
    }

    #[rstest]
    fn test_nth_smallest_bounds() {
        assert_eq!(nth_smallest(&[] as &[i32], 0), None);
        assert_eq!(nth_smallest(&[5, 3, 4], 1), Some(4));
    }
}
