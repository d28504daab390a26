//! Multi-precision unsigned integer stored as little-endian `u32` limbs
//!
//! The representation is canonical: no high zero limbs are kept, and zero is
//! the empty limb vector. Every constructor and every operation restores this
//! invariant, which is what makes the derived equality correct.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Arbitrary-precision unsigned integer.
///
/// Values are immutable: every operation returns a fresh `BigUint`, and no
/// operation truncates. Arithmetic results are exact regardless of magnitude.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigUint {
    /// Limbs in little-endian order, most significant limb nonzero
    limbs: Vec<u32>,
}

impl BigUint {
    /// The value zero
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// The value one
    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    /// Build from a `u64`
    pub fn from_u64(value: u64) -> Self {
        Self::from_limbs(vec![value as u32, (value >> 32) as u32])
    }

    /// Interpret a byte array as base-256 digits, most significant first.
    ///
    /// Leading zero bytes are accepted and ignored.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity(bytes.len() / 4 + 1);
        let mut end = bytes.len();
        // Four bytes at a time, starting from the least significant end.
        while end > 0 {
            let start = end.saturating_sub(4);
            let mut limb = 0u32;
            for &byte in &bytes[start..end] {
                limb = (limb << 8) | byte as u32;
            }
            limbs.push(limb);
            end = start;
        }
        Self::from_limbs(limbs)
    }

    /// Minimal big-endian byte encoding; zero encodes as a single `0x00`.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        if self.is_zero() {
            return vec![0];
        }
        let mut bytes = Vec::with_capacity(self.limbs.len() * 4);
        for &limb in self.limbs.iter().rev() {
            let be = limb.to_be_bytes();
            if bytes.is_empty() {
                // Highest limb: skip its leading zero bytes.
                let skip = be.iter().position(|&b| b != 0).unwrap_or(3);
                bytes.extend_from_slice(&be[skip..]);
            } else {
                bytes.extend_from_slice(&be);
            }
        }
        bytes
    }

    /// Big-endian byte encoding of exactly `width` bytes, left zero-padded.
    ///
    /// Fails with [`Error::Overflow`] when the value does not fit; the
    /// high-order data is never silently dropped. The all-zero value yields a
    /// zero-filled buffer.
    pub fn to_bytes_be_fixed(&self, width: usize) -> Result<Vec<u8>> {
        let needed = self.byte_len();
        if needed > width {
            return Err(Error::Overflow { needed, width });
        }
        let mut out = vec![0u8; width];
        for (i, &limb) in self.limbs.iter().enumerate() {
            for b in 0..4 {
                // Byte offset from the least significant end.
                let offset = 4 * i + b;
                if offset >= width {
                    break;
                }
                out[width - 1 - offset] = (limb >> (8 * b)) as u8;
            }
        }
        Ok(out)
    }

    /// Parse a hexadecimal digit string (case-insensitive, no prefix).
    ///
    /// Any non-hex character fails with [`Error::InvalidDigit`]; nothing is
    /// produced on failure.
    pub fn from_hex_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::Empty);
        }
        let mut limbs = Vec::with_capacity(s.len() / 8 + 1);
        let mut limb = 0u32;
        let mut shift = 0u32;
        for ch in s.chars().rev() {
            let digit = ch
                .to_digit(16)
                .ok_or(Error::InvalidDigit { ch, base: 16 })?;
            limb |= digit << shift;
            shift += 4;
            if shift == 32 {
                limbs.push(limb);
                limb = 0;
                shift = 0;
            }
        }
        if shift > 0 {
            limbs.push(limb);
        }
        Ok(Self::from_limbs(limbs))
    }

    /// Parse a decimal digit string.
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::Empty);
        }
        let mut value = Self::zero();
        for ch in s.chars() {
            let digit = ch
                .to_digit(10)
                .ok_or(Error::InvalidDigit { ch, base: 10 })?;
            value = value.mul_add_u32(10, digit);
        }
        Ok(value)
    }

    /// True for the value zero
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant bits; zero for the value zero
    pub fn bit_length(&self) -> usize {
        match self.limbs.last() {
            Some(&top) => (self.limbs.len() - 1) * 32 + (32 - top.leading_zeros() as usize),
            None => 0,
        }
    }

    /// Number of significant bytes; zero for the value zero
    pub fn byte_len(&self) -> usize {
        (self.bit_length() + 7) / 8
    }

    /// Bit `i`, counting from the least significant bit
    pub fn bit(&self, i: usize) -> bool {
        match self.limbs.get(i / 32) {
            Some(&limb) => (limb >> (i % 32)) & 1 == 1,
            None => false,
        }
    }

    /// Sum of `self` and `other`
    pub fn add(&self, other: &BigUint) -> BigUint {
        let len = self.limbs.len().max(other.limbs.len());
        let mut limbs = Vec::with_capacity(len + 1);
        let mut carry = 0u64;
        for i in 0..len {
            let a = self.limbs.get(i).copied().unwrap_or(0) as u64;
            let b = other.limbs.get(i).copied().unwrap_or(0) as u64;
            let sum = a + b + carry;
            limbs.push(sum as u32);
            carry = sum >> 32;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
        Self::from_limbs(limbs)
    }

    /// Difference `self - other`, or `None` when the result would be negative
    pub fn checked_sub(&self, other: &BigUint) -> Option<BigUint> {
        if self < other {
            return None;
        }
        Some(self.sub_unchecked(other))
    }

    fn sub_unchecked(&self, other: &BigUint) -> BigUint {
        debug_assert!(self >= other);
        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow = 0i64;
        for i in 0..self.limbs.len() {
            let a = self.limbs[i] as i64;
            let b = other.limbs.get(i).copied().unwrap_or(0) as i64;
            let mut diff = a - b - borrow;
            if diff < 0 {
                diff += 1i64 << 32;
                borrow = 1;
            } else {
                borrow = 0;
            }
            limbs.push(diff as u32);
        }
        Self::from_limbs(limbs)
    }

    /// Product of `self` and `other`
    pub fn mul(&self, other: &BigUint) -> BigUint {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut limbs = vec![0u32; self.limbs.len() + other.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &b) in other.limbs.iter().enumerate() {
                let t = a as u64 * b as u64 + limbs[i + j] as u64 + carry;
                limbs[i + j] = t as u32;
                carry = t >> 32;
            }
            limbs[i + other.limbs.len()] = carry as u32;
        }
        Self::from_limbs(limbs)
    }

    /// Quotient and remainder of `self / divisor`.
    ///
    /// # Panics
    ///
    /// Panics when `divisor` is zero, like native integer division.
    pub fn div_rem(&self, divisor: &BigUint) -> (BigUint, BigUint) {
        assert!(!divisor.is_zero(), "BigUint division by zero");

        // Single-limb divisors take the word-at-a-time path.
        if divisor.limbs.len() == 1 {
            let (q, r) = self.div_rem_u32(divisor.limbs[0]);
            return (q, Self::from_u64(r as u64));
        }
        if self < divisor {
            return (Self::zero(), self.clone());
        }

        // Shift-and-subtract long division: align the divisor with the
        // dividend's top bit, then walk the alignment back down one bit at a
        // time, setting quotient bits where the divisor still fits.
        let shift = self.bit_length() - divisor.bit_length();
        let mut remainder = self.clone();
        let mut shifted = divisor.shl_bits(shift);
        let mut quotient = vec![0u32; shift / 32 + 1];
        for i in (0..=shift).rev() {
            if remainder >= shifted {
                remainder = remainder.sub_unchecked(&shifted);
                quotient[i / 32] |= 1 << (i % 32);
            }
            if i > 0 {
                shifted = shifted.shr_bits(1);
            }
        }
        (Self::from_limbs(quotient), remainder)
    }

    /// Remainder of `self / modulus`.
    ///
    /// # Panics
    ///
    /// Panics when `modulus` is zero.
    pub fn rem(&self, modulus: &BigUint) -> BigUint {
        self.div_rem(modulus).1
    }

    /// Modular exponentiation: `self^exponent mod modulus`.
    ///
    /// Right-to-left square-and-multiply over the exponent's bits: for each
    /// bit, the accumulator picks up the current base power when the bit is
    /// set, and the base power is squared between steps. A zero exponent
    /// yields one (or zero when the modulus is one).
    ///
    /// # Panics
    ///
    /// Panics when `modulus` is zero.
    pub fn modpow(&self, exponent: &BigUint, modulus: &BigUint) -> BigUint {
        assert!(!modulus.is_zero(), "BigUint modpow with zero modulus");
        if modulus.limbs == [1] {
            return Self::zero();
        }
        let mut result = Self::one();
        let mut base = self.rem(modulus);
        let bits = exponent.bit_length();
        for i in 0..bits {
            if exponent.bit(i) {
                result = result.mul(&base).rem(modulus);
            }
            if i + 1 < bits {
                base = base.mul(&base).rem(modulus);
            }
        }
        result
    }

    fn div_rem_u32(&self, divisor: u32) -> (BigUint, u32) {
        debug_assert!(divisor != 0);
        let mut quotient = vec![0u32; self.limbs.len()];
        let mut rem = 0u64;
        for i in (0..self.limbs.len()).rev() {
            let cur = (rem << 32) | self.limbs[i] as u64;
            quotient[i] = (cur / divisor as u64) as u32;
            rem = cur % divisor as u64;
        }
        (Self::from_limbs(quotient), rem as u32)
    }

    fn mul_add_u32(&self, mul: u32, add: u32) -> BigUint {
        let mut limbs = Vec::with_capacity(self.limbs.len() + 1);
        let mut carry = add as u64;
        for &limb in &self.limbs {
            let t = limb as u64 * mul as u64 + carry;
            limbs.push(t as u32);
            carry = t >> 32;
        }
        while carry > 0 {
            limbs.push(carry as u32);
            carry >>= 32;
        }
        Self::from_limbs(limbs)
    }

    fn shl_bits(&self, n: usize) -> BigUint {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let limb_shift = n / 32;
        let bit_shift = n % 32;
        let mut limbs = vec![0u32; limb_shift];
        if bit_shift == 0 {
            limbs.extend_from_slice(&self.limbs);
        } else {
            let mut carry = 0u32;
            for &limb in &self.limbs {
                limbs.push((limb << bit_shift) | carry);
                carry = limb >> (32 - bit_shift);
            }
            if carry > 0 {
                limbs.push(carry);
            }
        }
        Self::from_limbs(limbs)
    }

    fn shr_bits(&self, n: usize) -> BigUint {
        if n == 0 || self.is_zero() {
            return self.clone();
        }
        let limb_shift = n / 32;
        let bit_shift = n % 32;
        if limb_shift >= self.limbs.len() {
            return Self::zero();
        }
        let src = &self.limbs[limb_shift..];
        let mut limbs = Vec::with_capacity(src.len());
        if bit_shift == 0 {
            limbs.extend_from_slice(src);
        } else {
            for (i, &limb) in src.iter().enumerate() {
                let mut v = limb >> bit_shift;
                if let Some(&next) = src.get(i + 1) {
                    v |= next << (32 - bit_shift);
                }
                limbs.push(v);
            }
        }
        Self::from_limbs(limbs)
    }

    /// Restore the canonical form: strip high zero limbs.
    fn from_limbs(mut limbs: Vec<u32>) -> Self {
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        Self { limbs }
    }
}

impl PartialOrd for BigUint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigUint {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical form makes limb count the primary key.
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        for i in (0..self.limbs.len()).rev() {
            match self.limbs[i].cmp(&other.limbs[i]) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl FromStr for BigUint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_decimal_str(s)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        // Peel off nine decimal digits at a time.
        let mut groups = Vec::new();
        let mut value = self.clone();
        while !value.is_zero() {
            let (q, r) = value.div_rem_u32(1_000_000_000);
            groups.push(r);
            value = q;
        }
        write!(f, "{}", groups.pop().expect("nonzero value has digits"))?;
        for group in groups.into_iter().rev() {
            write!(f, "{:09}", group)?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limbs.last() {
            None => f.write_str("0"),
            Some(&top) => {
                write!(f, "{:x}", top)?;
                for &limb in self.limbs[..self.limbs.len() - 1].iter().rev() {
                    write!(f, "{:08x}", limb)?;
                }
                Ok(())
            }
        }
    }
}

impl Zeroize for BigUint {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}
