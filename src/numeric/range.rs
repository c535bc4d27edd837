//! Generated numeric sequences.

use std::fmt::Display;

use super::primitive::Primitive;
use crate::error::SliceError;

/// Generates `min, min + step, min + 2·step, …` while the value stays below
/// `max`.
///
/// `min >= max` yields an empty result. Generation also stops when the next
/// value would not fit in `T`.
///
/// # Errors
///
/// Returns [`SliceError::InvalidStep`] if `step` is zero or negative.
///
/// # Examples
///
/// ```rust
/// use slicekit::numeric::sequence;
///
/// assert_eq!(sequence(0, 10, 3).unwrap(), vec![0, 3, 6, 9]);
/// assert_eq!(sequence(0.0, 1.0, 0.25).unwrap(), vec![0.0, 0.25, 0.5, 0.75]);
/// assert_eq!(sequence(5, 5, 1).unwrap(), Vec::<i32>::new());
/// assert_eq!(sequence(250_u8, 255, 10).unwrap(), vec![250]);
/// assert!(sequence(0, 10, 0).is_err());
/// ```
pub fn sequence<T>(min: T, max: T, step: T) -> Result<Vec<T>, SliceError>
where
    T: Primitive + Display,
{
    if step <= T::zero() {
        return Err(SliceError::InvalidStep {
            step: step.to_string(),
        });
    }

    let mut generated = Vec::new();
    let mut current = min;
    while current < max {
        generated.push(current);
        match current.checked_step(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(generated)
}

/// Generates `count` elements by calling `function` with each index.
///
/// # Examples
///
/// ```rust
/// use slicekit::numeric::sequence_using;
///
/// assert_eq!(sequence_using(4, |index| index * index), vec![0, 1, 4, 9]);
/// ```
pub fn sequence_using<T, F>(count: usize, function: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..count).map(function).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_sequence_negative_range() {
        assert_eq!(sequence(-3, 1, 2).unwrap(), vec![-3, -1]);
    }

    #[rstest]
    #[case(250_u8, 255, 10, vec![250])]
    #[case(250_u8, 255, 5, vec![250])]
    #[case(240_u8, 255, 7, vec![240, 247, 254])]
    fn test_sequence_ending_near_type_maximum(
        #[case] min: u8,
        #[case] max: u8,
        #[case] step: u8,
        #[case] expected: Vec<u8>,
    ) {
        assert_eq!(sequence(min, max, step).unwrap(), expected);
    }

    #[rstest]
    fn test_sequence_signed_near_type_maximum() {
        assert_eq!(
            sequence(i32::MAX - 3, i32::MAX, 2).unwrap(),
            vec![i32::MAX - 3, i32::MAX - 1]
        );
    }

    #[rstest]
    fn test_sequence_reversed_bounds_is_empty() {
        assert!(sequence(10, 0, 1).unwrap().is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    fn test_sequence_non_positive_step(#[case] step: i32) {
        let error = sequence(0, 10, step).unwrap_err();
        assert!(matches!(error, SliceError::InvalidStep { .. }));
        assert_eq!(
            format!("{error}"),
            format!("range step must be greater than zero, got {step}")
        );
    }

    #[rstest]
    fn test_sequence_using_zero_count() {
        assert!(sequence_using(0, |index| index).is_empty());
    }
}
