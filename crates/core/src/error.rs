//! Error types for the morse codec.
//!
//! Unrecognized symbols are not errors: the codec substitutes the wildcard
//! and keeps going. What remains are the buffer failures that used to abort
//! the process and are now handed back to the caller.

use thiserror::Error;

/// Top-level error type for all operations in the codec.
#[derive(Debug, Error)]
pub enum Error {
    /// Message buffer could not store another element
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Message buffer errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Growing the buffer would take it past its hard ceiling
    #[error("message capacity exceeded: growing to {requested} would pass the maximum of {max}")]
    CapacityExceeded { requested: usize, max: usize },

    /// Storage for the buffer could not be obtained
    #[error("out of memory reserving {requested} bytes of message storage")]
    AllocationFailed { requested: usize },

    /// Buffer limits are inconsistent (zero sizes, initial above maximum)
    #[error("invalid buffer limits: initial {initial}, increment {increment}, max {max}")]
    InvalidLimits {
        initial: usize,
        increment: usize,
        max: usize,
    },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
