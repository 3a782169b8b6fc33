//! Error types for resultwire.

use thiserror::Error;

/// Main error type for all encode operations.
#[derive(Debug, Error)]
pub enum ResultwireError {
    /// An integer does not fit the 4-byte variable-length encoding
    /// (values of 2^30 and above are unrepresentable).
    #[error("number too big ({0})")]
    NumberTooLarge(u64),

    /// The assembled frame exceeds the 3-byte length-field ceiling
    /// of 4,194,303 bytes. Carries the computed pre-length-field size.
    #[error("packet too big ({0} bytes)")]
    PacketTooLong(usize),

    /// The sink rejected or failed the frame write.
    #[error("sink write failed: {0}")]
    Sink(#[from] std::io::Error),
}

/// Result type alias using ResultwireError.
pub type Result<T> = std::result::Result<T, ResultwireError>;
