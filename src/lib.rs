//! # rcrypt
//!
//! Textbook RSA file encryption over clear-text key components.
//!
//! rcrypt encrypts and decrypts files (or in-memory messages) with raw
//! block-by-block RSA and PKCS#1 v1.5 padding, using key material exported by
//! `openssl rsa -text`. It carries its own arbitrary-precision arithmetic;
//! there is no FFI and no external math library.
//!
//! This is a teaching-grade cryptosystem: nothing here is constant-time, and
//! v1.5 encryption padding is famously malleable. Do not protect real data
//! with it.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from two sub-crates:
//!
//! - [`rcrypt-bignum`](rcrypt_bignum): arbitrary-precision unsigned integers
//!   and modular exponentiation
//! - [`rcrypt-rsa`](rcrypt_rsa): the key model, the component-file parser,
//!   and the PKCS#1 v1.5 block pipeline
//!
//! ## Example
//!
//! ```no_run
//! use rand::rngs::OsRng;
//! use rcrypt::prelude::{decrypt, encrypt, parse_components};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let text = std::fs::read_to_string("rsa_priv_components.txt")?;
//!     let key = parse_components(&text)?;
//!
//!     let cipher = encrypt(&mut OsRng, &key, b"attack at dawn")?;
//!     let plain = decrypt(&key, &cipher)?;
//!     assert_eq!(plain, b"attack at dawn");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

// Re-export the sub-crates under their short names
pub use rcrypt_bignum as bignum;
pub use rcrypt_rsa as rsa;

/// Convenient imports for typical usage
pub mod prelude {
    pub use rcrypt_bignum::BigUint;
    pub use rcrypt_rsa::{decrypt, encrypt, parse_components, Error, Result, RsaKey};
}
