//! Error handling for digest computation and stream hashing

use thiserror::Error;

/// Errors surfaced by engine construction, one-shot hashing, and stream hashing.
///
/// State-machine contract violations (appending to a finalized engine, finalizing
/// twice) are caller defects, not runtime conditions; those panic immediately
/// instead of appearing here.
#[derive(Debug, Error)]
pub enum HashError {
    /// The requested algorithm name is not in the registry.
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),

    /// The destination buffer is shorter than the algorithm's digest size.
    ///
    /// Always raised before anything is written, so the destination is untouched.
    #[error("destination buffer too small: digest needs {needed} bytes, destination holds {actual}")]
    InsufficientBuffer {
        /// Digest size of the algorithm in bytes.
        needed: usize,
        /// Length of the destination the caller supplied.
        actual: usize,
    },

    /// The stream source does not support reading.
    ///
    /// Detected before any read is attempted.
    #[error("stream source does not support reading")]
    SourceNotReadable,

    /// A read from the stream source failed.
    #[error("stream read failed: {0}")]
    Io(#[from] std::io::Error),

    /// Stream hashing was cancelled before completion.
    ///
    /// Reported only from the async stream path, and only at read boundaries;
    /// no partial digest is ever surfaced alongside this error.
    #[error("stream hashing cancelled")]
    Cancelled,
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
