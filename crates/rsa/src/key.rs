//! RSA key material

use rcrypt_bignum::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::params::{MIN_MODULUS_BYTES, MIN_PAD};

/// An RSA key assembled from clear-text components.
///
/// Carries every component an OpenSSL dump provides. The modulus and the two
/// exponents drive the pipeline; the CRT components (`p`, `q`, `dmp1`,
/// `dmq1`, `coeff`) are stored with the rest of the key but not used;
/// decryption always takes the plain `d` path.
///
/// The modulus byte width is fixed at construction and never changes for the
/// lifetime of the key; it is the block width of everything the pipeline
/// produces. All component material is wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RsaKey {
    /// Modulus
    pub n: BigUint,
    /// Public exponent
    pub e: BigUint,
    /// Private exponent
    pub d: BigUint,
    /// First prime factor
    pub p: BigUint,
    /// Second prime factor
    pub q: BigUint,
    /// `d mod (p-1)`
    pub dmp1: BigUint,
    /// `d mod (q-1)`
    pub dmq1: BigUint,
    /// `q^-1 mod p`
    pub coeff: BigUint,
    modulus_width: usize,
}

impl RsaKey {
    /// Assemble a key from its components, in the order OpenSSL prints them.
    ///
    /// Fails with [`Error::KeyTooSmall`] when the modulus is narrower than
    /// [`MIN_MODULUS_BYTES`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        n: BigUint,
        e: BigUint,
        d: BigUint,
        p: BigUint,
        q: BigUint,
        dmp1: BigUint,
        dmq1: BigUint,
        coeff: BigUint,
    ) -> Result<Self> {
        let modulus_width = n.byte_len();
        if modulus_width < MIN_MODULUS_BYTES {
            return Err(Error::KeyTooSmall {
                actual: modulus_width,
                min: MIN_MODULUS_BYTES,
            });
        }
        Ok(Self {
            n,
            e,
            d,
            p,
            q,
            dmp1,
            dmq1,
            coeff,
            modulus_width,
        })
    }

    /// Width in bytes of every padded and cipher block under this key
    pub fn modulus_width(&self) -> usize {
        self.modulus_width
    }

    /// Largest plaintext block the modulus admits with minimum padding
    pub fn max_plain_len(&self) -> usize {
        self.modulus_width - MIN_PAD
    }
}
