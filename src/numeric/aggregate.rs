//! Arithmetic reductions.
//!
//! Every reduction over an empty slice yields zero.

use std::ops::{Add, Mul};

use num_traits::{Signed, ToPrimitive, Zero};

/// Returns the sum of the elements.
///
/// # Examples
///
/// ```rust
/// use slicekit::numeric::sum;
///
/// assert_eq!(sum(&[1, 2, 3]), 6);
/// assert_eq!(sum(&[] as &[f64]), 0.0);
/// ```
pub fn sum<T>(elements: &[T]) -> T
where
    T: Copy + Zero + Add<Output = T>,
{
    elements
        .iter()
        .fold(T::zero(), |accumulator, element| accumulator + *element)
}

/// Returns the product of the elements.
///
/// An empty slice yields zero rather than the multiplicative identity, so
/// that every reduction agrees on what "nothing" reduces to.
///
/// # Examples
///
/// ```rust
/// use slicekit::numeric::product;
///
/// assert_eq!(product(&[2, 3, 4]), 24);
/// assert_eq!(product(&[] as &[i32]), 0);
/// ```
pub fn product<T>(elements: &[T]) -> T
where
    T: Copy + Zero + Mul<Output = T>,
{
    match elements.split_first() {
        Some((head, tail)) => tail
            .iter()
            .fold(*head, |accumulator, element| accumulator * *element),
        None => T::zero(),
    }
}

/// Returns the arithmetic mean as `f64`; zero for an empty slice.
///
/// # Examples
///
/// ```rust
/// use slicekit::numeric::average;
///
/// assert_eq!(average(&[1, 2, 3, 4]), 2.5);
/// assert_eq!(average(&[] as &[i32]), 0.0);
/// ```
pub fn average<T>(elements: &[T]) -> f64
where
    T: Copy + ToPrimitive,
{
    if elements.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = elements.len() as f64;
    elements.iter().map(to_f64).sum::<f64>() / count
}

/// Returns the population standard deviation as `f64`; zero for an empty
/// slice.
///
/// # Examples
///
/// ```rust
/// use slicekit::numeric::stddev;
///
/// assert_eq!(stddev(&[2, 4, 4, 4, 5, 5, 7, 9]), 2.0);
/// ```
pub fn stddev<T>(elements: &[T]) -> f64
where
    T: Copy + ToPrimitive,
{
    if elements.is_empty() {
        return 0.0;
    }
    let mean = average(elements);
    #[allow(clippy::cast_precision_loss)]
    let count = elements.len() as f64;
    let variance = elements
        .iter()
        .map(|element| {
            let deviation = to_f64(element) - mean;
            deviation * deviation
        })
        .sum::<f64>()
        / count;
    variance.sqrt()
}

/// Returns the absolute value of every element.
pub fn abs<T>(elements: &[T]) -> Vec<T>
where
    T: Copy + Signed,
{
    elements.iter().map(Signed::abs).collect()
}

fn to_f64<T: Copy + ToPrimitive>(element: &T) -> f64 {
    element.to_f64().unwrap_or(f64::NAN)
}
