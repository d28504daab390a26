//! Encrypt/decrypt orchestration
//!
//! The pipeline is a straight line of stages, each a pure function over the
//! block sequences of one invocation; nothing is shared across calls and no
//! state survives the call that created it. Blocks are processed
//! independently and strictly in index order: block `i` of the output always
//! comes from block `i` of the input, with no chaining of any kind.
//!
//! Encrypt: chunk → pad each → integer-encode each → `m^e mod n` each →
//! fixed-width bytes each → concatenate.
//! Decrypt: fixed-width split → integer-decode each → `c^d mod n` each →
//! fixed-width bytes each → unpad each → concatenate.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use rcrypt_bignum::BigUint;

use crate::chunk;
use crate::error::Result;
use crate::key::RsaKey;
use crate::padding;

/// Encrypt a message under `key`, drawing padding bytes from `rng`.
///
/// Returns one modulus-width cipher block per plaintext chunk, concatenated
/// in order. An empty message yields an empty ciphertext.
pub fn encrypt<R: CryptoRng + RngCore>(
    rng: &mut R,
    key: &RsaKey,
    plaintext: &[u8],
) -> Result<Vec<u8>> {
    let width = key.modulus_width();
    let blocks = chunk::split_plaintext(plaintext, key.max_plain_len());
    let padded = pad_blocks(rng, &blocks, width)?;
    let values = encode_blocks(padded);
    let cipher = apply_exponent(&values, &key.e, &key.n);
    collect_blocks(&cipher, width)
}

/// Decrypt a ciphertext produced by [`encrypt`] under the same modulus.
///
/// The ciphertext must be a whole number of modulus-width blocks. Recovered
/// plaintext blocks are concatenated in order; the first block may be
/// shorter than the rest, exactly as it was when the message was split.
pub fn decrypt(key: &RsaKey, ciphertext: &[u8]) -> Result<Vec<u8>> {
    let width = key.modulus_width();
    let blocks = chunk::split_ciphertext(ciphertext, width)?;
    let values = decode_blocks(&blocks);
    let padded = apply_exponent(&values, &key.d, &key.n);
    unpad_blocks(padded, width)
}

fn pad_blocks<R: CryptoRng + RngCore>(
    rng: &mut R,
    blocks: &[&[u8]],
    width: usize,
) -> Result<Vec<Vec<u8>>> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| padding::pad(rng, block, width, index))
        .collect()
}

/// Interpret each padded block as a big-endian integer, wiping the padded
/// bytes once they have been absorbed.
fn encode_blocks(mut padded: Vec<Vec<u8>>) -> Vec<BigUint> {
    let values = padded
        .iter()
        .map(|block| BigUint::from_bytes_be(block))
        .collect();
    padded.zeroize();
    values
}

fn decode_blocks(blocks: &[&[u8]]) -> Vec<BigUint> {
    blocks
        .iter()
        .map(|block| BigUint::from_bytes_be(block))
        .collect()
}

/// Raise every block value to `exponent` mod `modulus`; the whole cost of
/// the pipeline lives in this stage.
fn apply_exponent(values: &[BigUint], exponent: &BigUint, modulus: &BigUint) -> Vec<BigUint> {
    values
        .iter()
        .map(|value| value.modpow(exponent, modulus))
        .collect()
}

fn collect_blocks(values: &[BigUint], width: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(values.len() * width);
    for value in values {
        out.extend_from_slice(&value.to_bytes_be_fixed(width)?);
    }
    Ok(out)
}

fn unpad_blocks(mut values: Vec<BigUint>, width: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for (index, value) in values.iter().enumerate() {
        let mut padded = value.to_bytes_be_fixed(width)?;
        let plain = padding::unpad(&padded, index)?;
        padded.zeroize();
        out.extend_from_slice(&plain);
    }
    values.zeroize();
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    // Minimum-width (128-bit) key; small enough that private-exponent
    // exponentiation stays cheap in tests.
    fn small_key() -> RsaKey {
        let h = |s: &str| BigUint::from_hex_str(s).unwrap();
        RsaKey::new(
            h("a738598901570140cb854adc5bdfca4b"),
            h("10001"),
            h("3f324ca43a9d671b3963fe3f7ab9c201"),
            h("d30e660de2727095"),
            h("cad440636258375f"),
            h("10bf03b9f64dbe41"),
            h("6fb2819ef99ab12b"),
            h("1532ff4dfdc789b7"),
        )
        .unwrap()
    }

    #[test]
    fn round_trip_single_block() {
        let key = small_key();
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let message = b"hi203";
        let cipher = encrypt(&mut rng, &key, message).unwrap();
        assert_eq!(cipher.len(), key.modulus_width());
        assert_eq!(decrypt(&key, &cipher).unwrap(), message);
    }

    #[test]
    fn round_trip_multi_block() {
        let key = small_key();
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        // max_plain_len is 5, so 12 bytes split [2, 5, 5].
        let message: Vec<u8> = (0..12).collect();
        let cipher = encrypt(&mut rng, &key, &message).unwrap();
        assert_eq!(cipher.len(), 3 * key.modulus_width());
        assert_eq!(decrypt(&key, &cipher).unwrap(), message);
    }

    #[test]
    fn empty_message_round_trips_to_empty() {
        let key = small_key();
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        let cipher = encrypt(&mut rng, &key, &[]).unwrap();
        assert!(cipher.is_empty());
        assert_eq!(decrypt(&key, &cipher).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn blocks_are_independent_of_their_neighbors() {
        let key = small_key();
        let mut rng = ChaCha20Rng::seed_from_u64(14);
        let message: Vec<u8> = (0..15).collect();
        let cipher = encrypt(&mut rng, &key, &message).unwrap();
        let width = key.modulus_width();
        // Decrypting just the last two blocks recovers the last two chunks.
        let tail = decrypt(&key, &cipher[width..]).unwrap();
        assert_eq!(tail, &message[5..]);
    }
}
