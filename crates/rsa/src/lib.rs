//! Textbook RSA block pipeline with PKCS#1 v1.5 padding
//!
//! This crate turns an arbitrary byte message into a sequence of fixed-width
//! cipher blocks and back: the message is split into chunks sized by the
//! modulus, each chunk is padded to the modulus width, interpreted as a big
//! integer, raised to the key's exponent, and re-encoded as exactly one
//! modulus-width block. Decryption runs the same stages in reverse. Blocks
//! are independent; there is no chaining mode.
//!
//! Key material comes from the clear-text component dumps `openssl rsa -text`
//! produces; see [`keyfile::parse_components`].
//!
//! This is not a production cryptosystem: arithmetic is not constant-time and
//! the padding here reproduces the classic v1.5 algorithm, nothing more.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

pub mod params;

mod key;
pub use key::RsaKey;

pub mod keyfile;
pub use keyfile::parse_components;

pub mod chunk;
pub mod padding;

mod pipeline;
pub use pipeline::{decrypt, encrypt};
