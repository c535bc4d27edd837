#![cfg(all(feature = "structural", feature = "ordered"))]

//! Integration tests for [`Sequence`]: independence of results from their
//! inputs, and absent/empty equivalence.

use rstest::rstest;
use slicekit::Sequence;

fn sample() -> Sequence<i32> {
    vec![5, 3, 8, 1, 9, 2].into()
}

type Operation = fn(&Sequence<i32>) -> Sequence<i32>;

fn operations() -> [(&'static str, Operation); 17] {
    [
        ("clone", |sequence| sequence.clone()),
        ("filter", |sequence| sequence.filter(|number| number % 2 == 1)),
        ("filter_not", |sequence| sequence.filter_not(|number| *number > 4)),
        ("map", |sequence| sequence.map(|number| number * 2)),
        ("drop_while", |sequence| sequence.drop_while(|number| *number > 2)),
        ("reverse", |sequence| sequence.reverse()),
        ("rotate", |sequence| sequence.rotate(2)),
        ("insert", |sequence| sequence.insert(1, &[0])),
        ("delete", |sequence| sequence.delete(&[0])),
        ("sub_slice", |sequence| sequence.sub_slice(1, 4)),
        ("sort", |sequence| sequence.sort()),
        ("sort_using", |sequence| sequence.sort_using(|left, right| right.cmp(left))),
        ("top_all", |sequence| sequence.top(100)),
        ("top_some", |sequence| sequence.top(2)),
        ("bottom", |sequence| sequence.bottom(2)),
        ("drop_top_none", |sequence| sequence.drop_top(0)),
        ("drop_top_some", |sequence| sequence.drop_top(2)),
    ]
}

// =============================================================================
// Non-aliasing
// =============================================================================

#[rstest]
fn test_appending_to_result_leaves_input_unchanged() {
    for (name, operation) in operations() {
        let input = sample();
        let mut result = operation(&input);
        let expected = result.to_vec();

        result.push(42);

        assert_eq!(input, sample(), "input changed after {name}");
        assert_eq!(result.len(), expected.len() + 1, "result of {name}");
    }
}

#[rstest]
fn test_appending_to_input_leaves_result_unchanged() {
    for (name, operation) in operations() {
        let mut input = sample();
        let result = operation(&input);
        let expected = result.to_vec();

        input.push(42);

        assert_eq!(result, expected, "result changed after {name}");
    }
}

#[rstest]
fn test_single_element_results_stay_independent() {
    let input: Sequence<i32> = vec![1].into();
    let mut sorted = input.sort();
    let mut reversed = input.reverse();

    sorted.push(2);
    reversed.push(3);

    assert_eq!(input, vec![1]);
    assert_eq!(sorted, vec![1, 2]);
    assert_eq!(reversed, vec![1, 3]);
}

#[rstest]
fn test_sibling_appends_do_not_collide() {
    let base: Sequence<i32> = (0..4).collect();
    let first = base.appended(10);
    let second = base.appended(20);

    assert_eq!(first.get(4), Some(&10));
    assert_eq!(second.get(4), Some(&20));
    assert_eq!(base.len(), 4);
}

// =============================================================================
// Absent and empty equivalence
// =============================================================================

#[rstest]
fn test_queries_agree_on_absent_and_empty() {
    let absent: Sequence<i32> = Sequence::new();
    let empty: Sequence<i32> = Vec::new().into();

    assert_eq!(absent.len(), empty.len());
    assert_eq!(absent.is_empty(), empty.is_empty());
    assert_eq!(absent.all(|_| false), empty.all(|_| false));
    assert_eq!(absent.any(|_| true), empty.any(|_| true));
    assert_eq!(absent.contains(&1), empty.contains(&1));
    assert_eq!(absent.are_sorted(), empty.are_sorted());
    assert_eq!(absent.min(), empty.min());
    assert_eq!(absent.max(), empty.max());
    assert_eq!(absent.join(","), empty.join(","));
    assert_eq!(absent.reduce(|sum, number| sum + number), 0);
    assert_eq!(format!("{absent}"), format!("{empty}"));
    assert_eq!(absent.get(0), empty.get(0));
}

#[cfg(feature = "numeric")]
#[rstest]
fn test_numeric_queries_agree_on_absent_and_empty() {
    let absent: Sequence<f64> = Sequence::new();
    let empty: Sequence<f64> = Vec::new().into();

    assert_eq!(absent.median(), empty.median());
    assert_eq!(absent.sum(), empty.sum());
    assert_eq!(absent.product(), empty.product());
    assert_eq!(absent.average(), empty.average());
    assert_eq!(absent.stddev(), empty.stddev());
}

#[cfg(feature = "set")]
#[rstest]
fn test_set_queries_agree_on_absent_and_empty() {
    let absent: Sequence<i32> = Sequence::new();
    let empty: Sequence<i32> = Vec::new().into();

    assert_eq!(absent.are_unique(), empty.are_unique());
    assert_eq!(absent.unique(), empty.unique());
    assert_eq!(absent.diff(&empty), empty.diff(&absent));
    assert!(absent.diff(&empty).is_empty());
}

// =============================================================================
// Top with lenient counts
// =============================================================================

#[rstest]
#[case(-1)]
#[case(0)]
fn test_top_non_positive_is_absent(#[case] count: isize) {
    let prices: Sequence<f64> = vec![1.23, 2.34].into();
    assert!(prices.top(count).is_absent());
}

#[rstest]
fn test_top_beyond_length_returns_everything() {
    let prices: Sequence<f64> = vec![1.23, 2.34].into();
    assert_eq!(prices.top(3), vec![1.23, 2.34]);
}

#[rstest]
fn test_chained_operations() {
    let words: Sequence<&str> = vec!["pear", "fig", "apple", "kiwi"].into();
    let lengths = words
        .filter(|word| word.len() > 3)
        .map(|word| word.len())
        .sort();

    assert_eq!(lengths, vec![4, 4, 5]);
    assert_eq!(words.len(), 4);
}
