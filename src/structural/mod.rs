//! Structural operations that work for any element type.
//!
//! Nothing in this module needs ordering, arithmetic, or hashing: elements
//! are only moved, cloned, tested against a predicate, or converted.
//!
//! - Queries: [`all`], [`any`], [`contains`], [`first`], [`last`],
//!   [`find_first_using`], [`equals`], [`reduce`], [`each`]
//! - Transforms: [`filter`], [`map`], [`drop_while`], [`reverse`], [`rotate`],
//!   [`insert`], [`delete`], [`append`], [`extend`], [`sub_slice`], [`chunk`],
//!   [`zip`], [`pop`], [`shift`], [`unshift`], [`flatten`]
//! - String projection: [`strings`], [`strings_using`], [`join`]
//!
//! # Non-mutation
//!
//! Every function borrows its input and returns a newly owned result, so
//! growing the result can never write into the caller's storage:
//!
//! ```rust
//! use slicekit::structural::{append, filter};
//!
//! let numbers = vec![1, 2, 3, 4];
//! let mut evens = filter(&numbers, |number| number % 2 == 0);
//! evens.push(100);
//!
//! assert_eq!(evens, vec![2, 4, 100]);
//! assert_eq!(numbers, vec![1, 2, 3, 4]); // Original unchanged
//!
//! let longer = append(&numbers, &[5]);
//! assert_eq!(longer.len(), 5);
//! assert_eq!(numbers.len(), 4);
//! ```
//!
//! # Leniency
//!
//! Index and count parameters never fail: [`insert`] past the end appends,
//! [`delete`] skips indices that do not exist, and [`sub_slice`] pads
//! out-of-range positions with `T::default()`. Only [`chunk`] with a zero size
//! is rejected, because no sensible result exists.

mod projection;
mod query;
mod transform;

#[cfg(feature = "rayon")]
mod parallel;

pub use projection::join;
pub use projection::strings;
pub use projection::strings_using;
pub use query::all;
pub use query::any;
pub use query::contains;
pub use query::each;
pub use query::equals;
pub use query::find_first_using;
pub use query::first;
pub use query::first_or;
pub use query::last;
pub use query::last_or;
pub use query::reduce;
pub use transform::append;
pub use transform::chunk;
pub use transform::delete;
pub use transform::drop_while;
pub use transform::extend;
pub use transform::filter;
pub use transform::filter_not;
pub use transform::flatten;
pub use transform::insert;
pub use transform::map;
pub use transform::pop;
pub use transform::reverse;
pub use transform::rotate;
pub use transform::shift;
pub use transform::sub_slice;
pub use transform::unshift;
pub use transform::zip;

#[cfg(feature = "rayon")]
pub use parallel::par_filter;
#[cfg(feature = "rayon")]
pub use parallel::par_map;
