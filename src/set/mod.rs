//! Hash-backed set and grouping operations.
//!
//! Elements must implement [`Eq`] and [`Hash`]. Floating-point values do not,
//! so wrap them in a total-order type such as `ordered_float::OrderedFloat`
//! first.
//!
//! - Uniqueness: [`unique`], [`unique_stable`], [`are_unique`]
//! - Multiset comparison: [`diff`], [`intersect`]
//! - Grouping: [`group`], [`group_by`], [`mode`]
//!
//! # Ordering
//!
//! [`unique`] and [`mode`] return elements in hash-table iteration order,
//! which is unspecified and may change between runs, platforms, and hasher
//! features. Sort the result before comparing it, or use [`unique_stable`]
//! when first-occurrence order matters. Every other function here documents
//! its own, deterministic order.
//!
//! ```rust
//! use slicekit::set::{unique, unique_stable};
//!
//! let visits = ["home", "about", "home", "blog"];
//!
//! let mut pages = unique(&visits);
//! pages.sort_unstable();
//! assert_eq!(pages, vec!["about", "blog", "home"]);
//!
//! assert_eq!(unique_stable(&visits), vec!["home", "about", "blog"]);
//! ```
//!
//! # Hashers
//!
//! Internal tables use `std`'s `RandomState` unless the `fxhash` or `ahash`
//! feature selects a faster hasher. Returned maps always use the standard
//! hasher.

mod difference;
mod grouping;
mod hasher;
mod unique;

pub use difference::Difference;
pub use difference::diff;
pub use difference::intersect;
pub use grouping::group;
pub use grouping::group_by;
pub use grouping::mode;
pub use unique::are_unique;
pub use unique::unique;
pub use unique::unique_stable;
