//! Chainable methods on [`Sequence`].
//!
//! Each method delegates to the free function of the same name. Transforms
//! of an absent sequence return an absent sequence; reductions return the
//! same zero value the free function returns for an empty slice.

use super::Sequence;

#[cfg(feature = "structural")]
use crate::error::SliceError;
#[cfg(feature = "structural")]
use crate::structural;

#[cfg(feature = "ordered")]
use crate::ordered;

#[cfg(feature = "numeric")]
use crate::numeric;

#[cfg(feature = "set")]
use crate::set;

// =============================================================================
// Structural
// =============================================================================

#[cfg(feature = "structural")]
impl<T: Clone> Sequence<T> {
    /// Keeps the elements that satisfy the predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::Sequence;
    ///
    /// let numbers: Sequence<i32> = (1..=6).collect();
    /// let evens = numbers.filter(|number| number % 2 == 0);
    /// assert_eq!(evens, vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.derive(|elements| structural::filter(elements, predicate))
    }

    /// Drops the elements that satisfy the predicate.
    #[must_use]
    pub fn filter_not<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.derive(|elements| structural::filter_not(elements, predicate))
    }

    /// Drops leading elements while the predicate holds.
    #[must_use]
    pub fn drop_while<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&T) -> bool,
    {
        self.derive(|elements| structural::drop_while(elements, predicate))
    }

    /// Reverses the elements.
    ///
    /// Sequences of fewer than two elements are returned as a shared handle.
    #[must_use]
    pub fn reverse(&self) -> Self {
        if self.len() < 2 {
            return self.clone();
        }
        self.derive(structural::reverse)
    }

    /// Rotates the elements; see [`structural::rotate`].
    #[must_use]
    pub fn rotate(&self, positions: isize) -> Self {
        self.derive(|elements| structural::rotate(elements, positions))
    }

    /// Inserts `values` before `index`; see [`structural::insert`].
    #[must_use]
    pub fn insert(&self, index: usize, values: &[T]) -> Self {
        Self::from_vec(structural::insert(self.as_slice(), index, values))
    }

    /// Removes the elements at `indices`; see [`structural::delete`].
    #[must_use]
    pub fn delete(&self, indices: &[usize]) -> Self {
        self.derive(|elements| structural::delete(elements, indices))
    }

    /// Returns a new sequence with `values` appended.
    #[must_use]
    pub fn append(&self, values: &[T]) -> Self {
        Self::from_vec(structural::append(self.as_slice(), values))
    }

    /// Returns a new sequence with `values` prepended.
    #[must_use]
    pub fn unshift(&self, values: &[T]) -> Self {
        Self::from_vec(structural::unshift(self.as_slice(), values))
    }

    /// Splits into chunks of `size`.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::InvalidChunkSize`] if `size` is zero.
    pub fn chunk(&self, size: usize) -> Result<Vec<Self>, SliceError> {
        let chunks = structural::chunk(self.as_slice(), size)?;
        Ok(chunks.into_iter().map(Self::from_vec).collect())
    }

    /// Folds the elements; see [`structural::reduce`].
    pub fn reduce<F>(&self, function: F) -> T
    where
        T: Default,
        F: FnMut(T, &T) -> T,
    {
        structural::reduce(self.as_slice(), function)
    }

    /// Returns the elements in `start..end`, padded with `T::default()`; see
    /// [`structural::sub_slice`].
    #[must_use]
    pub fn sub_slice(&self, start: isize, end: isize) -> Self
    where
        T: Default,
    {
        self.derive(|elements| structural::sub_slice(elements, start, end))
    }
}

#[cfg(feature = "structural")]
impl<T> Sequence<T> {
    /// Transforms every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::Sequence;
    ///
    /// let words: Sequence<&str> = vec!["a", "bb"].into();
    /// assert_eq!(words.map(|word| word.len()), vec![1, 2]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        self.derive(|elements| structural::map(elements, function))
    }

    /// Returns `true` if every element satisfies the predicate.
    pub fn all<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        structural::all(self.as_slice(), predicate)
    }

    /// Returns `true` if any element satisfies the predicate.
    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        structural::any(self.as_slice(), predicate)
    }

    /// Returns `true` if `value` occurs in the sequence.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        structural::contains(self.as_slice(), value)
    }

    /// Joins the `Display` forms of the elements with `glue`.
    pub fn join(&self, glue: &str) -> String
    where
        T: std::fmt::Display,
    {
        structural::join(self.as_slice(), glue)
    }

    /// Converts every element to its `Display` form.
    #[must_use]
    pub fn strings(&self) -> Sequence<String>
    where
        T: std::fmt::Display,
    {
        self.derive(structural::strings)
    }
}

// =============================================================================
// Ordered
// =============================================================================

#[cfg(feature = "ordered")]
impl<T: PartialOrd + Clone> Sequence<T> {
    /// Sorts the elements in ascending order.
    ///
    /// Sequences of fewer than two elements are returned as a shared handle.
    #[must_use]
    pub fn sort(&self) -> Self {
        if self.len() < 2 {
            return self.clone();
        }
        self.derive(ordered::sort)
    }

    /// Returns `true` if the elements are in ascending order.
    pub fn are_sorted(&self) -> bool {
        ordered::are_sorted(self.as_slice())
    }

    /// Returns the smallest element, or `T::default()` if empty.
    pub fn min(&self) -> T
    where
        T: Default,
    {
        ordered::min(self.as_slice())
    }

    /// Returns the largest element, or `T::default()` if empty.
    pub fn max(&self) -> T
    where
        T: Default,
    {
        ordered::max(self.as_slice())
    }
}

#[cfg(feature = "ordered")]
impl<T: Clone> Sequence<T> {
    /// Sorts with a comparator (unstable).
    #[must_use]
    pub fn sort_using<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.derive(|elements| ordered::sort_using(elements, compare))
    }

    /// Sorts with a comparator, keeping equal elements in order.
    #[must_use]
    pub fn sort_stable_using<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        self.derive(|elements| ordered::sort_stable_using(elements, compare))
    }

    /// Returns the first `count` elements.
    ///
    /// A count of zero or less yields an absent sequence. A count covering
    /// every element returns a shared handle.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slicekit::Sequence;
    ///
    /// let prices: Sequence<f64> = vec![1.23, 2.34].into();
    /// assert!(prices.top(-1).is_absent());
    /// assert!(prices.top(0).is_empty());
    /// assert!(prices.top(3).shares_storage_with(&prices));
    /// ```
    #[must_use]
    pub fn top(&self, count: isize) -> Self {
        match ordered::clamp_count(count, self.len()) {
            0 => Self::new(),
            taken if taken == self.len() => self.clone(),
            _ => self.derive(|elements| ordered::top(elements, count)),
        }
    }

    /// Returns the last `count` elements, last first.
    #[must_use]
    pub fn bottom(&self, count: isize) -> Self {
        if ordered::clamp_count(count, self.len()) == 0 {
            return Self::new();
        }
        self.derive(|elements| ordered::bottom(elements, count))
    }

    /// Drops the first `count` elements.
    ///
    /// A count of zero or less returns a shared handle.
    #[must_use]
    pub fn drop_top(&self, count: isize) -> Self {
        if ordered::clamp_count(count, self.len()) == 0 {
            return self.clone();
        }
        self.derive(|elements| ordered::drop_top(elements, count))
    }
}

// =============================================================================
// Numeric
// =============================================================================

#[cfg(feature = "numeric")]
impl<T> Sequence<T>
where
    T: Copy + PartialOrd + num_traits::Num + num_traits::ToPrimitive,
{
    /// Returns the median; see [`numeric::median`].
    pub fn median(&self) -> T
    where
        T: numeric::Primitive,
    {
        numeric::median(self.as_slice())
    }

    /// Returns the sum, or zero if empty.
    pub fn sum(&self) -> T {
        numeric::sum(self.as_slice())
    }

    /// Returns the product, or zero if empty.
    pub fn product(&self) -> T {
        numeric::product(self.as_slice())
    }

    /// Returns the arithmetic mean, or zero if empty.
    pub fn average(&self) -> f64 {
        numeric::average(self.as_slice())
    }

    /// Returns the population standard deviation, or zero if empty.
    pub fn stddev(&self) -> f64 {
        numeric::stddev(self.as_slice())
    }
}

// =============================================================================
// Set
// =============================================================================

#[cfg(feature = "set")]
impl<T> Sequence<T>
where
    T: Eq + std::hash::Hash + Clone,
{
    /// Returns each distinct element once, in unspecified order.
    #[must_use]
    pub fn unique(&self) -> Self {
        self.derive(set::unique)
    }

    /// Returns each distinct element once, in first-occurrence order.
    #[must_use]
    pub fn unique_stable(&self) -> Self {
        self.derive(set::unique_stable)
    }

    /// Returns `true` if no element occurs more than once.
    pub fn are_unique(&self) -> bool {
        set::are_unique(self.as_slice())
    }

    /// Compares with `after` as multisets; see [`set::diff`].
    pub fn diff(&self, after: &Self) -> set::Difference<T> {
        set::diff(self.as_slice(), after.as_slice())
    }

    /// Keeps distinct elements that also occur in every one of `others`.
    #[must_use]
    pub fn intersect(&self, others: &[&Self]) -> Self {
        let others: Vec<&[T]> = others.iter().map(|other| other.as_slice()).collect();
        self.derive(|elements| set::intersect(elements, &others))
    }
}

// =============================================================================
// Random
// =============================================================================

#[cfg(feature = "random")]
impl<T: Clone> Sequence<T> {
    /// Returns the elements in a random order drawn from `rng`.
    #[must_use]
    pub fn shuffle<R>(&self, rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        self.derive(|elements| crate::random::shuffle(elements, rng))
    }
}
