//! Cancellable, backpressure-respecting transfer into a `tokio` channel.
//!
//! [`send`] offers the elements of a slice to a bounded
//! [`tokio::sync::mpsc::Sender`] one at a time, in order. Each handoff waits
//! for channel capacity, so a slow receiver throttles the sender; nothing is
//! buffered inside this crate.
//!
//! # Cancellation
//!
//! A [`CancellationSource`] hands out [`CancellationSignal`]s. The signal is
//! checked before each element and once more after capacity for it has been
//! reserved, so an element is either fully handed off or not offered at all.
//! An element that is already in the channel is never taken back.
//!
//! # Channel ownership
//!
//! [`send`] only borrows the sender and never closes the channel. The caller
//! owns its lifecycle: drop every sender to let the receiver observe the end
//! of the stream.
//!
//! # Examples
//!
//! ```rust
//! use slicekit::channel::{CancellationSource, SendStatus, send};
//! use tokio::sync::mpsc;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let (sender, mut receiver) = mpsc::channel(4);
//! let source = CancellationSource::new();
//!
//! let outcome = send(&["foo", "bar"], &sender, &source.signal()).await;
//! assert_eq!(outcome.status(), SendStatus::Completed);
//! assert_eq!(outcome.sent(), &["foo", "bar"]);
//!
//! drop(sender);
//! assert_eq!(receiver.recv().await, Some("foo"));
//! assert_eq!(receiver.recv().await, Some("bar"));
//! assert_eq!(receiver.recv().await, None);
//! # });
//! ```

mod cancellation;
mod send;

pub use cancellation::CancellationSignal;
pub use cancellation::CancellationSource;
pub use send::SendOutcome;
pub use send::SendStatus;
pub use send::send;
