//! Error types for array operations.
//!
//! Every fallible operation on a `FixedArray` or `GrowableArray` reports
//! one of the [`ArrayError`] variants. Errors are raised synchronously by the
//! call that detects them and the array is left exactly as it was.

use std::error::Error;
use std::fmt;

use crate::element::ElementType;

/// Convenience alias for results carrying an [`ArrayError`].
pub type Result<T, E = ArrayError> = std::result::Result<T, E>;

/// Errors from construction, access, search, and resize of arrays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Bad construction or resize parameters.
    InvalidArgument {
        /// What was wrong with the arguments.
        reason: String,
    },
    /// A read, write, or pop addressed a slot outside the valid range.
    IndexOutOfRange {
        /// The index as supplied by the caller (before any wraparound).
        index: isize,
        /// Number of addressable slots at the time of the call.
        len: usize,
    },
    /// A value does not satisfy the array's element type tag.
    TypeMismatch {
        /// The array's declared element type.
        expected: ElementType,
        /// The type of the rejected value.
        found: ElementType,
    },
    /// A search found no matching element.
    NotFound,
    /// A shrinking resize would drop live elements and was not acknowledged.
    ///
    /// Recoverable: re-issue the resize with data loss accepted to truncate.
    DataLossWarning {
        /// The requested capacity.
        requested: usize,
        /// Number of live elements that the resize would have to fit.
        count: usize,
    },
    /// Growth or resize past the configured maximum capacity.
    CapacityExceeded {
        /// The requested capacity.
        requested: usize,
        /// The configured maximum.
        max: usize,
    },
}

impl ArrayError {
    /// Build an [`ArrayError::IndexOutOfRange`] from an unsigned index.
    ///
    /// Indices beyond `isize::MAX` saturate; no addressable slot lives there.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: isize::try_from(index).unwrap_or(isize::MAX),
            len,
        }
    }

    /// Build an [`ArrayError::InvalidArgument`] with the given reason.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::TypeMismatch { expected, found } => {
                write!(f, "invalid type ({found}) for {expected} array")
            }
            Self::NotFound => write!(f, "value not found in array"),
            Self::DataLossWarning { requested, count } => {
                write!(
                    f,
                    "resizing to {requested} would drop {} of {count} live elements",
                    count.saturating_sub(*requested)
                )
            }
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested}, maximum {max}"
                )
            }
        }
    }
}

impl Error for ArrayError {}
