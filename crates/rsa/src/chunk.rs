//! Message chunking
//!
//! A message splits into an ordered run of blocks sized against the modulus.
//! The first block absorbs the remainder and may be short; every later block
//! is exactly the maximum size. Ciphertext splits the other way round: it is
//! only ever a whole number of modulus-width blocks.

use crate::error::{Error, Result};

/// Split a plaintext into blocks of at most `max_block` bytes.
///
/// The first block is `len % max_block` bytes, normalized to a full
/// `max_block` when the remainder is zero and the input is nonempty; a
/// zero-length leading block is never produced. Every subsequent block is
/// exactly `max_block` bytes, so the blocks together consume the input
/// exactly. An empty input yields no blocks.
pub fn split_plaintext(bytes: &[u8], max_block: usize) -> Vec<&[u8]> {
    debug_assert!(max_block > 0);
    if bytes.is_empty() {
        return Vec::new();
    }
    let mut first = bytes.len() % max_block;
    if first == 0 {
        first = max_block;
    }
    let mut blocks = Vec::with_capacity(1 + (bytes.len() - first) / max_block);
    blocks.push(&bytes[..first]);
    let mut offset = first;
    while offset < bytes.len() {
        blocks.push(&bytes[offset..offset + max_block]);
        offset += max_block;
    }
    blocks
}

/// Split a ciphertext into blocks of exactly `width` bytes.
///
/// Fails with [`Error::CorruptCiphertext`] when the length is not an exact
/// multiple of the block width.
pub fn split_ciphertext(bytes: &[u8], width: usize) -> Result<Vec<&[u8]>> {
    debug_assert!(width > 0);
    if bytes.len() % width != 0 {
        return Err(Error::CorruptCiphertext {
            actual: bytes.len(),
            width,
        });
    }
    Ok(bytes.chunks_exact(width).collect())
}
