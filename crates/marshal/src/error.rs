//! Marshalling error taxonomy.
//!
//! Every conversion failure is reported to the immediate caller through
//! one of these variants; nothing is retried (conversions are pure and
//! deterministic) and nothing is swallowed. Messages name the argument
//! position and the expected type so the embedding runtime can surface
//! them verbatim.

use tensorlink_core::LayoutError;
use thiserror::Error;

/// All marshalling errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarshalError {
    /// Runtime value's coarse kind does not match any acceptable type
    /// for the requested target, or a materializer branch/byte-size
    /// check failed.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// Numeric value present but outside the representable range of the
    /// target integer width.
    #[error("value out of range: {0}")]
    OutOfRange(String),

    /// String value present but absent from the element-type catalog.
    #[error("unknown element type: {0:?}")]
    UnknownElementType(String),

    /// String value present but rejected by the layout parser.
    #[error("invalid layout {text:?}: {reason}")]
    InvalidLayout {
        /// The descriptor string as received
        text: String,
        /// Why parsing rejected it
        reason: String,
    },

    /// Requested key has no bound slot in the request.
    #[error("unknown tensor key: {0}")]
    UnknownTensorKey(String),

    /// Outbound conversion given a native value outside the catalog's
    /// domain.
    #[error("unsupported native type: {0}")]
    UnsupportedNativeType(String),
}

impl From<LayoutError> for MarshalError {
    fn from(e: LayoutError) -> Self {
        MarshalError::InvalidLayout {
            text: e.text,
            reason: e.reason,
        }
    }
}

/// Result type for marshalling operations.
pub type Result<T> = std::result::Result<T, MarshalError>;
