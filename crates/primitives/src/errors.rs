//! Errors that can occur while parsing the primitive types.

use thiserror::Error;

/// Errors that can occur while parsing an [`Address`](crate::types::Address) from a string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseAddressError {
    /// The string is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded bytes do not have the length of an address.
    #[error("invalid address length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// The expected number of bytes.
        expected: usize,
        /// The actual number of bytes.
        actual: usize,
    },
}
