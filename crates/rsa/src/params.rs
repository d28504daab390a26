//! Constants for the RSA block pipeline

/// Minimum padding overhead per block in bytes: the three marker bytes plus
/// at least eight bytes of random filler, per PKCS#1 v1.5.
pub const MIN_PAD: usize = 11;

/// Smallest accepted modulus width in bytes (128-bit modulus). Narrower
/// moduli leave no room for the padding arithmetic; this is a sanity floor,
/// not a security parameter.
pub const MIN_MODULUS_BYTES: usize = 16;

/// Block-type marker of a v1.5 encryption block (`00 02 PS 00 M`)
pub const BLOCK_TYPE: u8 = 0x02;

/// Common RSA public exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;
