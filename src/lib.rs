//! # slicekit
//!
//! Generic, non-mutating operations over slices and maps, with a
//! linear-time median selection at its core.
//!
//! ## Overview
//!
//! Every operation is a free function over `&[T]` (or a map's entries) that
//! leaves its input untouched and returns a freshly owned result:
//!
//! - **Structural**: filter, map, chunk, insert, rotate, string projection
//! - **Ordered**: sort, min/max, top/bottom
//! - **Numeric**: median, sum, product, average, standard deviation, ranges
//! - **Set**: unique, intersect, multiset diff, group, mode
//! - **Random**: shuffle and random pick over a caller-provided RNG
//! - **Map**: key and value extraction
//! - **Channel**: cancellable, backpressure-respecting send into a tokio channel
//!
//! [`Sequence`] wraps the same operations in a persistent handle that treats
//! an absent sequence exactly like an empty one and never lets a mutation
//! through one handle become visible through another.
//!
//! ## Feature Flags
//!
//! - `structural`: Filter, map, and other shape-changing operations
//! - `ordered`: Sorting and ordered selection
//! - `numeric`: Median and arithmetic aggregates
//! - `set`: Hash-backed set and grouping operations
//! - `random`: Shuffle and random pick
//! - `channel`: Cancellable send into a `tokio` channel
//! - `serde`: JSON projection of [`Sequence`]
//! - `rayon`: Parallel `map` / `filter` (implies `arc`)
//! - `arc`: Thread-safe reference counting for [`Sequence`]
//! - `fxhash` / `ahash`: Faster hashers for the set operations' internal tables
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use slicekit::prelude::*;
//!
//! let readings = [2.1, 12.3, 4.5];
//! assert_eq!(median(&readings), 4.5);
//!
//! let sequence: Sequence<i32> = vec![3, 1, 2].into();
//! let sorted = sequence.sort();
//! assert_eq!(sorted.as_slice(), &[1, 2, 3]);
//! assert_eq!(sequence.as_slice(), &[3, 1, 2]); // Original unchanged
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every operation module together with [`Sequence`] and
/// [`SliceError`].
///
/// # Usage
///
/// ```rust
/// use slicekit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SliceError;
    pub use crate::sequence::Sequence;

    #[cfg(feature = "structural")]
    pub use crate::structural::*;

    #[cfg(feature = "ordered")]
    pub use crate::ordered::*;

    #[cfg(feature = "numeric")]
    pub use crate::numeric::*;

    #[cfg(feature = "set")]
    pub use crate::set::*;

    #[cfg(feature = "random")]
    pub use crate::random::*;

    pub use crate::map::*;

    #[cfg(feature = "channel")]
    pub use crate::channel::*;
}

pub mod error;
pub mod map;
pub mod sequence;

pub use error::SliceError;
pub use sequence::Sequence;

#[cfg(feature = "structural")]
pub mod structural;

#[cfg(feature = "ordered")]
pub mod ordered;

#[cfg(feature = "numeric")]
pub mod numeric;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "random")]
pub mod random;

#[cfg(feature = "channel")]
pub mod channel;
