//! Error types for big-integer parsing and conversion

use thiserror::Error;

/// Result type for bignum operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for bignum operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A digit string contained a character outside the requested base
    #[error("invalid digit '{ch}' for base {base}")]
    InvalidDigit {
        /// The offending character
        ch: char,
        /// The base the string was parsed in
        base: u32,
    },

    /// A digit string was empty
    #[error("empty digit string")]
    Empty,

    /// A value does not fit the requested fixed byte width
    #[error("value needs {needed} bytes but the field is {width} bytes wide")]
    Overflow {
        /// Minimal byte length of the value
        needed: usize,
        /// Requested field width
        width: usize,
    },
}
