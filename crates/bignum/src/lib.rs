//! Arbitrary-precision unsigned integer arithmetic
//!
//! This crate provides [`BigUint`], the multi-precision integer type the RSA
//! block pipeline is built on. It implements exact arithmetic (addition,
//! subtraction, multiplication, division with remainder), right-to-left
//! modular exponentiation, and the conversions the pipeline needs: hexadecimal
//! and decimal digit strings in both directions, and fixed-width big-endian
//! byte arrays.
//!
//! The type is deliberately small: only the operations the pipeline exercises
//! are implemented, all of them on plain `u32` limbs. Nothing here is
//! constant-time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

mod uint;
pub use uint::BigUint;
