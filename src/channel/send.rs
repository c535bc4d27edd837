//! The cancellable send loop.

use tokio::sync::mpsc;

use super::CancellationSignal;

/// Why [`send`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SendStatus {
    /// Every element was handed off.
    Completed,
    /// The cancellation signal fired before every element was handed off.
    Cancelled,
    /// The receiver was dropped before every element was handed off.
    Disconnected,
}

/// The result of [`send`]: which prefix of the input reached the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome<'a, T> {
    elements: &'a [T],
    sent_count: usize,
    status: SendStatus,
}

impl<'a, T> SendOutcome<'a, T> {
    /// Returns the elements that were handed off, in order.
    #[must_use]
    pub fn sent(&self) -> &'a [T] {
        &self.elements[..self.sent_count]
    }

    /// Returns the elements that were never offered.
    #[must_use]
    pub fn unsent(&self) -> &'a [T] {
        &self.elements[self.sent_count..]
    }

    /// Returns how many elements were handed off.
    #[must_use]
    pub const fn sent_count(&self) -> usize {
        self.sent_count
    }

    /// Returns why sending stopped.
    #[must_use]
    pub const fn status(&self) -> SendStatus {
        self.status
    }

    /// Returns `true` if every element was handed off.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == SendStatus::Completed
    }
}

/// Hands off every element to `sender` in order until done, cancelled, or
/// disconnected.
///
/// Each handoff waits for channel capacity. `signal` is checked before every
/// element and again once capacity has been reserved; if it has fired, the
/// reserved slot is released unused and the element is not sent.
///
/// The channel is never closed by this function.
///
/// # Examples
///
/// ```rust
/// use slicekit::channel::{CancellationSource, SendStatus, send};
/// use tokio::sync::mpsc;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let (sender, _receiver) = mpsc::channel(8);
/// let source = CancellationSource::new();
/// source.cancel();
///
/// let outcome = send(&[1, 2, 3], &sender, &source.signal()).await;
/// assert_eq!(outcome.status(), SendStatus::Cancelled);
/// assert!(outcome.sent().is_empty());
/// assert_eq!(outcome.unsent(), &[1, 2, 3]);
/// # });
/// ```
pub async fn send<'a, T>(
    elements: &'a [T],
    sender: &mpsc::Sender<T>,
    signal: &CancellationSignal,
) -> SendOutcome<'a, T>
where
    T: Clone,
{
    let stop = |sent_count: usize, status: SendStatus| {
        tracing::debug!(
            sent = sent_count,
            remaining = elements.len() - sent_count,
            ?status,
            "send stopped early"
        );
        SendOutcome {
            elements,
            sent_count,
            status,
        }
    };

    for (index, element) in elements.iter().enumerate() {
        if signal.is_cancelled() {
            return stop(index, SendStatus::Cancelled);
        }
        let Ok(permit) = sender.reserve().await else {
            return stop(index, SendStatus::Disconnected);
        };
        if signal.is_cancelled() {
            drop(permit);
            return stop(index, SendStatus::Cancelled);
        }
        permit.send(element.clone());
        tracing::trace!(index, "element handed off");
    }

    SendOutcome {
        elements,
        sent_count: elements.len(),
        status: SendStatus::Completed,
    }
}
