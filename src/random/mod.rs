//! Randomized operations.
//!
//! The source of randomness is always supplied by the caller, so results are
//! reproducible with a seeded generator such as [`rand::rngs::StdRng`].
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use slicekit::random::shuffle;
//!
//! let deck = vec![1, 2, 3, 4, 5];
//! let first = shuffle(&deck, &mut StdRng::seed_from_u64(7));
//! let second = shuffle(&deck, &mut StdRng::seed_from_u64(7));
//!
//! assert_eq!(first, second);
//! assert_eq!(deck, vec![1, 2, 3, 4, 5]); // Original unchanged
//! ```

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

/// Returns the elements in a random order drawn from `rng`.
pub fn shuffle<T, R>(elements: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = elements.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Returns the elements in a random order fully determined by `seed`.
///
/// # Examples
///
/// ```rust
/// use slicekit::random::shuffle_seeded;
///
/// assert_eq!(shuffle_seeded(&[1, 2, 3], 42), shuffle_seeded(&[1, 2, 3], 42));
/// ```
pub fn shuffle_seeded<T: Clone>(elements: &[T], seed: u64) -> Vec<T> {
    tracing::trace!(seed, length = elements.len(), "seeded shuffle");
    shuffle(elements, &mut StdRng::seed_from_u64(seed))
}

/// Picks one element uniformly at random, or `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use slicekit::random::random;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let colors = ["red", "green", "blue"];
/// assert!(colors.contains(random(&colors, &mut rng).unwrap()));
/// assert_eq!(random(&[] as &[&str], &mut rng), None);
/// ```
pub fn random<'a, T, R>(elements: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    elements.choose(rng)
}
