//! Errors returned by the write phase.

use thiserror::Error;

/// Failures that prevent an escape from completing.
///
/// Malformed input is not an error: it is replaced and reported through
/// [`Status::InvalidInput`](crate::Status::InvalidInput).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EscapeError {
    /// The destination cannot hold the escaped output and its terminator.
    #[error("destination holds {capacity} bytes but {needed} are required")]
    DestinationTooSmall {
        /// Bytes required, terminator included.
        needed: usize,
        /// Length of the destination that was supplied.
        capacity: usize,
    },
}
