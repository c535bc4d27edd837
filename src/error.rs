//! Error types for slice operations.
//!
//! Only structural misuse is an error: a parameter that makes the operation
//! meaningless, such as a zero chunk size. Out-of-range counts and indices are
//! handled leniently by the operations themselves and never surface here.

use thiserror::Error;

/// Represents errors that can occur when calling a slice operation.
///
/// # Examples
///
/// ```rust
/// use slicekit::SliceError;
///
/// let error = SliceError::InvalidChunkSize { size: 0 };
/// assert_eq!(
///     format!("{error}"),
///     "chunk size must be greater than zero, got 0"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SliceError {
    /// A chunked operation was asked for chunks of size zero.
    #[error("chunk size must be greater than zero, got {size}")]
    InvalidChunkSize {
        /// The rejected chunk size.
        size: usize,
    },

    /// A range was asked to advance by a step that is zero or negative.
    #[error("range step must be greater than zero, got {step}")]
    InvalidStep {
        /// The rejected step, rendered with its `Display` form.
        step: String,
    },

    /// Encoding a sequence as JSON failed.
    #[cfg(feature = "serde")]
    #[error("failed to encode sequence as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SliceError {
    /// Returns `true` if this error was caused by an invalid parameter rather
    /// than by an external collaborator such as the JSON encoder.
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidChunkSize { .. } | Self::InvalidStep { .. }
        )
    }
}
