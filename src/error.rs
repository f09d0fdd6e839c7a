//! Error types for string comparison and encoding operations.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur when comparing, encoding or stemming strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operands of a position-wise metric have different lengths.
    ///
    /// Hamming distance is only defined for equal-length inputs; it never
    /// truncates or pads on the caller's behalf.
    #[error("Length mismatch: left operand has {left} characters, right operand has {right}")]
    LengthMismatch {
        /// Character count of the left operand
        left: usize,
        /// Character count of the right operand
        right: usize,
    },

    /// The logical word length passed to the stemmer exceeds the buffer.
    #[error("Word length {len} exceeds buffer capacity {capacity}")]
    LengthOutOfBounds {
        /// Requested logical length
        len: usize,
        /// Length of the caller's buffer
        capacity: usize,
    },

    /// A metric name could not be parsed into an [`Algorithm`](crate::distance::Algorithm)
    /// or [`Similarity`](crate::similarity::Similarity).
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// An encoder name could not be parsed into an [`Encoder`](crate::phonetic::Encoder).
    #[error("Unknown encoder: {0}")]
    UnknownEncoder(String),

    /// The output buffer for an owned key could not be allocated.
    #[error("Out of memory while allocating result")]
    OutOfMemory(#[from] TryReserveError),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
