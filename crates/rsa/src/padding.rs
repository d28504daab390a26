//! PKCS#1 v1.5 encryption-block padding
//!
//! A padded block reads `00 02 PS 00 M`: the block-type marker, random
//! non-zero filler, a zero separator, then the plaintext. The filler being
//! non-zero is what makes the separator findable again on the way back.

use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};
use crate::params::{BLOCK_TYPE, MIN_PAD};

/// Pad `plain` into a block of exactly `width` bytes.
///
/// The block is filled back to front, the way the separator-based layout
/// suggests: plaintext into the tail, one zero separator, random non-zero
/// filler (redrawing any zero byte), then the `00 02` marker over the first
/// two bytes. Fails with [`Error::PlaintextTooLarge`] when `width` cannot
/// hold the plaintext plus [`MIN_PAD`] bytes of overhead; `index` is the
/// block index reported in that error.
pub fn pad<R: CryptoRng + RngCore>(
    rng: &mut R,
    plain: &[u8],
    width: usize,
    index: usize,
) -> Result<Vec<u8>> {
    if width < plain.len() + MIN_PAD {
        return Err(Error::PlaintextTooLarge {
            index,
            actual: plain.len(),
            capacity: width.saturating_sub(MIN_PAD),
            width,
        });
    }

    let mut block = vec![0u8; width];
    let mut n = width;
    for &byte in plain.iter().rev() {
        n -= 1;
        block[n] = byte;
    }
    n -= 1;
    block[n] = 0x00; // separator
    while n > 2 {
        let mut draw = [0u8; 1];
        loop {
            rng.fill_bytes(&mut draw);
            if draw[0] != 0 {
                break;
            }
        }
        n -= 1;
        block[n] = draw[0];
    }
    n -= 1;
    block[n] = BLOCK_TYPE;
    n -= 1;
    block[n] = 0x00;
    debug_assert_eq!(n, 0);

    Ok(block)
}

/// Recover the plaintext from a padded block.
///
/// The block must open with exactly one zero byte followed by the block-type
/// marker, and a zero separator must appear before the block runs out;
/// everything after the separator is the plaintext. Any structural violation
/// fails with [`Error::InvalidPadding`] carrying the block index.
pub fn unpad(block: &[u8], index: usize) -> Result<Vec<u8>> {
    let width = block.len();
    let mut i = 0;
    while i < width && block[i] == 0 {
        i += 1;
    }
    if i != 1 || block.get(i) != Some(&BLOCK_TYPE) {
        return Err(Error::InvalidPadding { index });
    }
    i += 1;
    let separator = block[i..]
        .iter()
        .position(|&b| b == 0)
        .ok_or(Error::InvalidPadding { index })?;
    Ok(block[i + separator + 1..].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng(seed: u64) -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(seed)
    }

    #[test]
    fn layout_markers_and_separator() {
        let plain = b"hello block";
        let block = pad(&mut rng(1), plain, 64, 0).unwrap();
        assert_eq!(block.len(), 64);
        assert_eq!(block[0], 0x00);
        assert_eq!(block[1], 0x02);
        // Filler is non-zero up to the separator.
        let filler = &block[2..64 - plain.len() - 1];
        assert!(filler.iter().all(|&b| b != 0));
        assert_eq!(block[64 - plain.len() - 1], 0x00);
        assert_eq!(&block[64 - plain.len()..], plain);
    }

    #[test]
    fn round_trip() {
        let plain = b"attack at dawn";
        let block = pad(&mut rng(7), plain, 128, 0).unwrap();
        assert_eq!(unpad(&block, 0).unwrap(), plain);
    }

    #[test]
    fn round_trip_survives_zero_bytes_in_plaintext() {
        let plain = [0u8, 1, 0, 2, 0, 0, 3];
        let block = pad(&mut rng(9), &plain, 32, 0).unwrap();
        assert_eq!(unpad(&block, 0).unwrap(), plain);
    }

    #[test]
    fn padding_differs_between_calls_but_unpads_the_same() {
        let plain = b"same plaintext";
        let a = pad(&mut rng(1), plain, 64, 0).unwrap();
        let b = pad(&mut rng(2), plain, 64, 0).unwrap();
        assert_ne!(a, b);
        assert_eq!(unpad(&a, 0).unwrap(), unpad(&b, 0).unwrap());
    }

    #[test]
    fn minimum_overhead_is_enforced() {
        // 118 + 11 > 128
        let plain = vec![7u8; 118];
        assert_eq!(
            pad(&mut rng(1), &plain, 128, 4),
            Err(Error::PlaintextTooLarge {
                index: 4,
                actual: 118,
                capacity: 117,
                width: 128
            })
        );
        // 117 + 11 = 128 just fits.
        assert!(pad(&mut rng(1), &vec![7u8; 117], 128, 4).is_ok());
    }

    #[test]
    fn unpad_rejects_bad_markers() {
        let mut block = pad(&mut rng(3), b"data", 32, 2).unwrap();
        block[0] = 0x01;
        assert_eq!(unpad(&block, 2), Err(Error::InvalidPadding { index: 2 }));

        let mut block = pad(&mut rng(3), b"data", 32, 2).unwrap();
        block[1] = 0x01;
        assert_eq!(unpad(&block, 2), Err(Error::InvalidPadding { index: 2 }));

        // More than one leading zero is also malformed.
        let mut block = pad(&mut rng(3), b"data", 32, 2).unwrap();
        block[1] = 0x00;
        block[2] = 0x02;
        assert_eq!(unpad(&block, 2), Err(Error::InvalidPadding { index: 2 }));
    }

    #[test]
    fn unpad_requires_a_separator() {
        let mut block = vec![0xffu8; 32];
        block[0] = 0x00;
        block[1] = 0x02;
        assert_eq!(unpad(&block, 0), Err(Error::InvalidPadding { index: 0 }));
    }

    #[test]
    fn unpad_rejects_the_all_zero_block() {
        assert_eq!(unpad(&[0u8; 32], 0), Err(Error::InvalidPadding { index: 0 }));
    }

    #[test]
    fn empty_plaintext_pads_and_unpads() {
        let block = pad(&mut rng(5), &[], 16, 0).unwrap();
        assert_eq!(block.len(), 16);
        assert_eq!(unpad(&block, 0).unwrap(), Vec::<u8>::new());
    }
}
