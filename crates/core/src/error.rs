//! Error types for the core domain crate.
//!
//! These stay deliberately small: layout parsing and tensor construction
//! are the only fallible operations on this side of the boundary. The
//! marshalling crate wraps them into its own taxonomy.

use thiserror::Error;

/// Layout descriptor parse failure.
///
/// Carries the offending descriptor text and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid layout {text:?}: {reason}")]
pub struct LayoutError {
    /// The descriptor string as received
    pub text: String,
    /// Why parsing rejected it
    pub reason: String,
}

impl LayoutError {
    pub(crate) fn new(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from tensor construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Supplied buffer does not match the byte size implied by (type, shape)
    #[error("buffer size mismatch: tensor needs {expected} bytes, got {actual}")]
    BufferSize {
        /// Bytes required by element type and shape
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },
}
