//! Operations over elements with an ordering.
//!
//! Elements only need [`PartialOrd`], so floating-point slices work out of
//! the box. Values that are not comparable with themselves (NaN) are ordered
//! after every comparable value; see [`total_order`].
//!
//! - Sorting: [`sort`], [`sort_using`], [`sort_stable_using`], [`are_sorted`]
//! - Extremes: [`min`], [`max`]
//! - Counted selection: [`top`], [`bottom`], [`drop_top`]
//!
//! # Examples
//!
//! ```rust
//! use slicekit::ordered::{max, sort, top};
//!
//! let prices = vec![4.5, 1.25, 3.0];
//! assert_eq!(sort(&prices), vec![1.25, 3.0, 4.5]);
//! assert_eq!(max(&prices), 4.5);
//! assert_eq!(top(&prices, 2), vec![4.5, 1.25]);
//! assert_eq!(prices, vec![4.5, 1.25, 3.0]); // Original unchanged
//! ```

mod comparison;
mod extremes;
mod sort;

pub use comparison::total_order;
pub use extremes::bottom;
pub use extremes::drop_top;
pub use extremes::max;
pub use extremes::min;
pub use extremes::top;
pub use sort::are_sorted;
pub use sort::sort;
pub use sort::sort_stable_using;
pub use sort::sort_using;

pub(crate) use extremes::clamp_count;
