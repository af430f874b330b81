//! Error types for the tour
//!
//! The tour has exactly two fallible paths: writing a line to the output
//! sink, and indexing a shared sequence outside its fixed length. Arithmetic
//! overflow, NaN, and infinity are demonstration outputs, never errors.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for tour operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the tour
#[derive(Debug, Error)]
pub enum Error {
    /// Output sink write failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Sequence element access outside the fixed length
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Fixed length of the sequence
        len: usize,
    },
}
