//! Error types for the lockbit crate.
//!
//! This module provides a unified error type for all fallible operations,
//! using the `thiserror` crate for ergonomic error handling.

use thiserror::Error;

/// The main error type for lockbit operations.
///
/// Every failure is a caller-side programming error (an invalid bit
/// position); there are no environmental or transient failure modes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockbitError {
    /// Bit position outside the addressable range
    #[error("bit position {position} out of bounds (array holds {num_bits} bits)")]
    IndexOutOfBounds {
        /// The position that was requested
        position: usize,
        /// The number of addressable bit positions
        num_bits: usize,
    },
}

/// A specialized `Result` type for lockbit operations.
///
/// This is a type alias for `Result<T, LockbitError>` and is used
/// throughout the crate for consistency.
pub type Result<T> = std::result::Result<T, LockbitError>;
