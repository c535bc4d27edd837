use std::cmp::Ordering;

/// Compares two values with a total order derived from [`PartialOrd`].
///
/// Comparable values keep their natural order. A value that is not
/// comparable with itself (such as `f64::NAN`) sorts after every comparable
/// value, and two such values compare equal. This keeps sorting and
/// selection well defined for floating-point input.
///
/// # Examples
///
/// ```rust
/// use slicekit::ordered::total_order;
/// use std::cmp::Ordering;
///
/// assert_eq!(total_order(&1.0, &2.0), Ordering::Less);
/// assert_eq!(total_order(&f64::NAN, &2.0), Ordering::Greater);
/// assert_eq!(total_order(&f64::NAN, &f64::NAN), Ordering::Equal);
/// ```
pub fn total_order<T: PartialOrd>(left: &T, right: &T) -> Ordering {
    left.partial_cmp(right).unwrap_or_else(|| {
        match (is_comparable(left), is_comparable(right)) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        }
    })
}

#[allow(clippy::eq_op)]
fn is_comparable<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, 1.0, Ordering::Equal)]
    #[case(-0.5, 1.0, Ordering::Less)]
    #[case(2.0, 1.0, Ordering::Greater)]
    #[case(f64::INFINITY, f64::NAN, Ordering::Less)]
    #[case(f64::NAN, f64::NEG_INFINITY, Ordering::Greater)]
    fn test_total_order_floats(#[case] left: f64, #[case] right: f64, #[case] expected: Ordering) {
        assert_eq!(total_order(&left, &right), expected);
    }

    #[rstest]
    fn test_total_order_sorts_nan_last() {
        let mut values = vec![f64::NAN, 3.0, 1.0, f64::NAN, 2.0];
        values.sort_by(total_order);
        assert_eq!(&values[..3], &[1.0, 2.0, 3.0]);
        assert!(values[3].is_nan());
        assert!(values[4].is_nan());
    }
}
