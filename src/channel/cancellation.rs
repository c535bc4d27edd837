//! One-shot cancellation built on a `tokio::sync::watch` channel.

use tokio::sync::watch;

/// The cancelling side of a cancellation pair.
///
/// Cancellation is sticky: once [`cancel`](Self::cancel) has been called,
/// every signal derived from this source, including ones created later,
/// reports cancellation.
///
/// # Examples
///
/// ```rust
/// use slicekit::channel::CancellationSource;
///
/// let source = CancellationSource::new();
/// let signal = source.signal();
/// assert!(!signal.is_cancelled());
///
/// source.cancel();
/// assert!(signal.is_cancelled());
/// assert!(source.signal().is_cancelled());
/// ```
#[derive(Debug)]
pub struct CancellationSource {
    sender: watch::Sender<bool>,
}

impl CancellationSource {
    /// Creates a source that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self { sender }
    }

    /// Returns a signal observing this source.
    #[must_use]
    pub fn signal(&self) -> CancellationSignal {
        CancellationSignal {
            receiver: self.sender.subscribe(),
        }
    }

    /// Fires the cancellation. Calling it again has no further effect.
    pub fn cancel(&self) {
        if !self.sender.send_replace(true) {
            tracing::debug!("cancellation fired");
        }
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

/// The observing side of a cancellation pair.
///
/// Signals are cheap to clone. Dropping the [`CancellationSource`] without
/// cancelling leaves its signals permanently un-cancelled.
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    receiver: watch::Receiver<bool>,
}

impl CancellationSignal {
    /// Returns a signal that never fires.
    #[must_use]
    pub fn never() -> Self {
        CancellationSource::new().signal()
    }

    /// Returns `true` if the source has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_new_source_is_not_cancelled() {
        let source = CancellationSource::default();
        assert!(!source.is_cancelled());
        assert!(!source.signal().is_cancelled());
    }

    #[rstest]
    fn test_cancel_is_visible_to_clones() {
        let source = CancellationSource::new();
        let signal = source.signal();
        let cloned = signal.clone();

        source.cancel();
        source.cancel();

        assert!(source.is_cancelled());
        assert!(signal.is_cancelled());
        assert!(cloned.is_cancelled());
    }

    #[rstest]
    fn test_never_stays_uncancelled() {
        let signal = CancellationSignal::never();
        assert!(!signal.is_cancelled());
    }

    #[rstest]
    fn test_dropped_source_leaves_signal_uncancelled() {
        let source = CancellationSource::new();
        let signal = source.signal();
        drop(source);
        assert!(!signal.is_cancelled());
    }
}
