//! Multiset difference and intersection.

use std::hash::Hash;

use super::hasher::{table, table_set};

/// The outcome of [`diff`]: what must be added to and removed from the
/// `before` slice to obtain the `after` slice, counting duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Difference<T> {
    /// Elements present in `after` but not matched in `before`, in `after`'s
    /// order.
    pub added: Vec<T>,
    /// Elements present in `before` but not matched in `after`, in
    /// `before`'s order.
    pub removed: Vec<T>,
}

impl<T> Difference<T> {
    /// Returns `true` if both sides held the same elements with the same
    /// multiplicities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Swaps `added` and `removed`, yielding the difference in the opposite
    /// direction.
    #[must_use]
    pub fn invert(self) -> Self {
        Self {
            added: self.removed,
            removed: self.added,
        }
    }
}

/// Compares two slices as multisets.
///
/// An element that occurs `k` times in one slice and `j` times in the other
/// contributes `max(0, k - j)` copies to the corresponding side of the
/// result. Matching consumes the earliest occurrences, so the surplus copies
/// are the later ones.
///
/// # Examples
///
/// ```rust
/// use slicekit::set::diff;
///
/// let difference = diff(&[1, 2, 2, 3], &[2, 3, 3, 4]);
/// assert_eq!(difference.removed, vec![1, 2]);
/// assert_eq!(difference.added, vec![3, 4]);
/// ```
pub fn diff<T>(before: &[T], after: &[T]) -> Difference<T>
where
    T: Eq + Hash + Clone,
{
    Difference {
        added: surplus(after, before),
        removed: surplus(before, after),
    }
}

/// Returns the distinct elements of `first` that also occur in every slice
/// of `others`, in first-occurrence order.
///
/// With no `others`, every distinct element of `first` is returned.
///
/// # Examples
///
/// ```rust
/// use slicekit::set::intersect;
///
/// let common = intersect(&[1, 2, 3, 2], &[&[2, 3, 4], &[3, 2]]);
/// assert_eq!(common, vec![2, 3]);
/// ```
pub fn intersect<T>(first: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let lookups: Vec<_> = others
        .iter()
        .map(|other| {
            let mut lookup = table_set(other.len());
            lookup.extend(other.iter());
            lookup
        })
        .collect();

    let mut emitted = table_set(first.len());
    first
        .iter()
        .filter(|element| lookups.iter().all(|lookup| lookup.contains(*element)))
        .filter(|element| emitted.insert(*element))
        .cloned()
        .collect()
}

/// Elements of `source` left over after cancelling each occurrence in
/// `other` against one occurrence in `source`.
fn surplus<T>(source: &[T], other: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut available = table(other.len());
    for element in other {
        *available.entry(element).or_insert(0_usize) += 1;
    }

    source
        .iter()
        .filter(|element| match available.get_mut(*element) {
            Some(count) if *count > 0 => {
                *count -= 1;
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}
