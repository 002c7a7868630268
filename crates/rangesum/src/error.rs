//! Error types for rangesum

use std::fmt;

/// Result type alias for range-sum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for range-sum and cache operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cache capacity must be at least 1
    InvalidCapacity(usize),

    /// Index outside `[0, len)`
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Array length at the time of the call
        len: usize,
    },

    /// Range with `left > right`
    InvalidRange {
        /// Left bound
        left: usize,
        /// Right bound
        right: usize,
    },

    /// Range sum does not fit in `i64`
    SumOverflow {
        /// Left bound
        left: usize,
        /// Right bound
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(cap) => {
                write!(f, "Invalid capacity: {} (must be at least 1)", cap)
            }
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: {} (len {})", index, len)
            }
            Error::InvalidRange { left, right } => {
                write!(f, "Invalid range: left {} > right {}", left, right)
            }
            Error::SumOverflow { left, right } => {
                write!(f, "Sum overflow over range [{}, {}]", left, right)
            }
        }
    }
}

impl std::error::Error for Error {}
