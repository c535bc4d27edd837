//! A persistent sequence handle.
//!
//! [`Sequence`] wraps a reference-counted `Vec` and exposes the crate's
//! operations as chainable methods. Two properties set it apart from a plain
//! `Vec`:
//!
//! - **Absent equals empty.** `Sequence::new()` allocates nothing and
//!   represents an absent sequence, yet it compares equal to, hashes like,
//!   displays like, and serializes like an empty one. Transforms of an absent
//!   sequence stay absent; reductions of it yield zero.
//! - **Shared storage, private mutation.** Operations whose result is
//!   content-identical to their input (sorting one element, `top` with a count
//!   covering everything, …) hand back a handle to the same storage instead of
//!   copying. Every mutating method detaches shared storage first, so a
//!   `push` through one handle is never visible through another.
//!
//! # Examples
//!
//! ```rust
//! use slicekit::Sequence;
//!
//! let original: Sequence<i32> = vec![1].into();
//! let mut sorted = original.sort(); // single element: storage is shared
//! assert!(sorted.shares_storage_with(&original));
//!
//! sorted.push(2); // detaches before writing
//! assert_eq!(sorted, vec![1, 2]);
//! assert_eq!(original, vec![1]);
//! assert!(!sorted.shares_storage_with(&original));
//! ```
//!
//! ```rust
//! use slicekit::Sequence;
//!
//! let absent: Sequence<f64> = Sequence::new();
//! let empty: Sequence<f64> = Vec::new().into();
//!
//! assert_eq!(absent, empty);
//! assert_eq!(absent.len(), 0);
//! assert_eq!(absent.median(), empty.median());
//! assert_eq!(format!("{absent}"), "[]");
//! ```

mod operations;

#[cfg(feature = "serde")]
mod serialization;

use std::fmt;
use std::hash::{Hash, Hasher};

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Sequence<i32>: Send, Sync);

// =============================================================================
// Sequence Definition
// =============================================================================

/// A persistent, possibly absent sequence of elements.
///
/// Cloning a `Sequence` is O(1) and shares storage; see the
/// [module documentation](self) for the sharing and mutation rules.
pub struct Sequence<T> {
    storage: Option<ReferenceCounter<Vec<T>>>,
}

impl<T> Sequence<T> {
    /// Creates an absent sequence without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::Sequence;
    ///
    /// let sequence: Sequence<i32> = Sequence::new();
    /// assert!(sequence.is_absent());
    /// assert!(sequence.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { storage: None }
    }

    /// Creates a present sequence that owns `elements`.
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self {
            storage: Some(ReferenceCounter::new(elements)),
        }
    }

    /// Returns `true` if this sequence was never given any storage.
    ///
    /// This is the only observation that tells an absent sequence apart from
    /// an empty one.
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.storage.is_none()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if the sequence holds no elements (absent or empty).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Views the elements as a slice; absent sequences view as `&[]`.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.storage
            .as_deref()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns `true` if both handles point at the same storage.
    ///
    /// Absent sequences have no storage and never share.
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.storage, &other.storage) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Builds a new sequence from the result of `operation`, keeping absent
    /// input absent.
    fn derive<U>(&self, operation: impl FnOnce(&[T]) -> Vec<U>) -> Sequence<U> {
        if self.is_absent() {
            Sequence::new()
        } else {
            Sequence::from_vec(operation(self.as_slice()))
        }
    }
}

impl<T: Clone> Sequence<T> {
    /// Appends `value` in place.
    ///
    /// Storage shared with other handles is copied first, so the other
    /// handles never observe the new element.
    pub fn push(&mut self, value: T) {
        self.storage_mut().push(value);
    }

    /// Appends every element of `values` in place, detaching shared storage
    /// first.
    pub fn extend_from_slice(&mut self, values: &[T]) {
        self.storage_mut().extend_from_slice(values);
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Returns `None` and leaves the sequence untouched if `index` is out of
    /// bounds.
    pub fn replace(&mut self, index: usize, value: T) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        Some(std::mem::replace(&mut self.storage_mut()[index], value))
    }

    /// Returns a new sequence with `value` appended, leaving `self`
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::Sequence;
    ///
    /// let base: Sequence<i32> = vec![1, 2].into();
    /// let left = base.appended(3);
    /// let right = base.appended(4);
    ///
    /// assert_eq!(left, vec![1, 2, 3]);
    /// assert_eq!(right, vec![1, 2, 4]);
    /// assert_eq!(base, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn appended(&self, value: T) -> Self {
        let mut appended = self.clone();
        appended.push(value);
        appended
    }

    /// Copies the elements into a new `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    fn storage_mut(&mut self) -> &mut Vec<T> {
        let storage = self
            .storage
            .get_or_insert_with(|| ReferenceCounter::new(Vec::new()));
        if ReferenceCounter::strong_count(storage) > 1 {
            tracing::trace!(length = storage.len(), "detaching shared storage before mutation");
        }
        ReferenceCounter::make_mut(storage)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for Sequence<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<&[T]> for Sequence<T> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> From<Option<Vec<T>>> for Sequence<T> {
    fn from(elements: Option<Vec<T>>) -> Self {
        elements.map_or_else(Self::new, Self::from_vec)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(elements: &[T]) -> Self {
        Self::from_vec(elements.to_vec())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage
            .map(ReferenceCounter::unwrap_or_clone)
            .unwrap_or_default()
            .into_iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
