//! Error types for the RSA block pipeline

use thiserror::Error;

/// Result type for RSA operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for RSA operations.
///
/// Every variant is terminal for the current invocation: it signals a
/// malformed input or an API misuse, never a transient condition. Variants
/// carry the offending block index where one exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Big-integer parsing or conversion failed
    #[error("bignum: {0}")]
    Bignum(#[from] rcrypt_bignum::Error),

    /// A plaintext block cannot fit the modulus width with minimum padding
    #[error(
        "block {index}: plaintext is {actual} bytes but at most {capacity} fit a {width}-byte modulus"
    )]
    PlaintextTooLarge {
        /// Index of the offending block
        index: usize,
        /// Size of the plaintext block
        actual: usize,
        /// Largest plaintext size the modulus admits
        capacity: usize,
        /// Modulus width in bytes
        width: usize,
    },

    /// A padded block failed the `00 02 .. 00` structural check
    #[error("block {index}: invalid PKCS#1 v1.5 padding (corrupt ciphertext or key mismatch)")]
    InvalidPadding {
        /// Index of the offending block
        index: usize,
    },

    /// Ciphertext length is not a multiple of the modulus width
    #[error("ciphertext is {actual} bytes, not a multiple of the {width}-byte block size")]
    CorruptCiphertext {
        /// Ciphertext length in bytes
        actual: usize,
        /// Modulus width in bytes
        width: usize,
    },

    /// The modulus is too narrow for the padding arithmetic to make sense
    #[error("modulus is {actual} bytes wide; at least {min} bytes are required")]
    KeyTooSmall {
        /// Modulus width in bytes
        actual: usize,
        /// Minimum accepted width
        min: usize,
    },

    /// A key component file did not have the expected layout
    #[error("key component file, section '{section}': {reason}")]
    KeyFile {
        /// The section being parsed when the error was found
        section: &'static str,
        /// What was wrong with it
        reason: &'static str,
    },
}
