//! Hasher selection for the internal lookup tables.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "fxhash")]
pub(crate) type TableHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type TableHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type TableHasher = std::collections::hash_map::RandomState;

pub(crate) type Table<K, V> = HashMap<K, V, TableHasher>;

pub(crate) type TableSet<T> = HashSet<T, TableHasher>;

pub(crate) fn table<K, V>(capacity: usize) -> Table<K, V> {
    HashMap::with_capacity_and_hasher(capacity, TableHasher::default())
}

pub(crate) fn table_set<T>(capacity: usize) -> TableSet<T> {
    HashSet::with_capacity_and_hasher(capacity, TableHasher::default())
}
