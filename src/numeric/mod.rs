//! Numeric operations: median selection, arithmetic reductions, and ranges.
//!
//! Element types are described with [`num_traits`] bounds, so every primitive
//! integer and float works without per-type code.
//!
//! # Median
//!
//! [`median`] avoids a full sort: it copies the input and runs a
//! three-way-partition quickselect on the copy, visiting only the part of
//! the buffer that can still hold the middle position(s). Average running
//! time is linear; repeated values collapse into a single band instead of
//! degrading the search. The two middle values of an even-length input are
//! averaged with [`Primitive::midpoint`], which cannot overflow.
//!
//! ```rust
//! use slicekit::numeric::median;
//!
//! let samples = vec![9.0, 1.0, 8.0, 2.0];
//! assert_eq!(median(&samples), 5.0);
//! assert_eq!(samples, vec![9.0, 1.0, 8.0, 2.0]); // Original unchanged
//! ```
//!
//! # Zero results
//!
//! Every reduction over an empty slice returns zero: `median`, [`sum`],
//! [`product`], [`average`], and [`stddev`] alike.

mod aggregate;
mod median;
mod primitive;
mod range;
mod selection;

pub use aggregate::abs;
pub use aggregate::average;
pub use aggregate::product;
pub use aggregate::stddev;
pub use aggregate::sum;
pub use median::median;
pub use median::nth_smallest;
pub use primitive::Primitive;
pub use range::sequence;
pub use range::sequence_using;
