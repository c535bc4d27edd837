//! Key and value extraction for associative containers.
//!
//! The functions accept any iterator of `(&K, &V)` pairs, so they work with
//! `&HashMap`, `&BTreeMap`, and their iterators alike.
//!
//! # Ordering
//!
//! [`keys`] and [`values`] follow the iteration order of the container they
//! are given. For hash maps that order is unspecified and must not be relied
//! on; use [`sorted_keys`] when a deterministic order is needed.
//!
//! ```rust
//! use std::collections::HashMap;
//! use slicekit::map::{keys, sorted_keys, values};
//!
//! let stock = HashMap::from([("apples", 3), ("pears", 0), ("figs", 12)]);
//!
//! assert_eq!(sorted_keys(&stock), vec!["apples", "figs", "pears"]);
//!
//! let mut counts = values(&stock);
//! counts.sort_unstable();
//! assert_eq!(counts, vec![0, 3, 12]);
//! assert_eq!(keys(&stock).len(), 3);
//! ```

/// Returns a clone of every key, in the container's iteration order.
pub fn keys<'a, K, V, I>(entries: I) -> Vec<K>
where
    K: Clone + 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries.into_iter().map(|(key, _)| key.clone()).collect()
}

/// Returns a clone of every value, in the container's iteration order.
pub fn values<'a, K, V, I>(entries: I) -> Vec<V>
where
    K: 'a,
    V: Clone + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries.into_iter().map(|(_, value)| value.clone()).collect()
}

/// Returns a clone of every key in ascending order.
pub fn sorted_keys<'a, K, V, I>(entries: I) -> Vec<K>
where
    K: Clone + Ord + 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut sorted = keys(entries);
    sorted.sort_unstable();
    sorted
}
