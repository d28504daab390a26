//! Parser for OpenSSL clear-text key component dumps
//!
//! `openssl rsa -in key.pem -text` prints every key component as a labelled
//! section: a header line such as `modulus:` followed by indented lines of
//! colon-separated hex byte pairs, except the public exponent, which sits on
//! its own line in decimal (`publicExponent: 65537 (0x10001)`). Sections
//! always appear in the same order, so the parser walks them in order and
//! names the section in every error it reports.

use std::iter::Peekable;

use rcrypt_bignum::BigUint;

use crate::error::{Error, Result};
use crate::key::RsaKey;

/// Parse the text of an OpenSSL private-key component dump into a key.
///
/// Expects the sections `modulus`, `publicExponent`, `privateExponent`,
/// `prime1`, `prime2`, `exponent1`, `exponent2` and `coefficient`, in that
/// order. The leading `Private-Key: (... bit)` banner is skipped when
/// present.
pub fn parse_components(text: &str) -> Result<RsaKey> {
    let mut lines = text.lines().peekable();

    if let Some(line) = lines.peek() {
        if line.contains("Private-Key:") {
            lines.next();
        }
    }

    expect_section(&mut lines, "modulus:")?;
    let n = read_hex_component(&mut lines, "modulus")?;
    let e = read_public_exponent(&mut lines)?;
    expect_section(&mut lines, "privateExponent:")?;
    let d = read_hex_component(&mut lines, "privateExponent")?;
    expect_section(&mut lines, "prime1:")?;
    let p = read_hex_component(&mut lines, "prime1")?;
    expect_section(&mut lines, "prime2:")?;
    let q = read_hex_component(&mut lines, "prime2")?;
    expect_section(&mut lines, "exponent1:")?;
    let dmp1 = read_hex_component(&mut lines, "exponent1")?;
    expect_section(&mut lines, "exponent2:")?;
    let dmq1 = read_hex_component(&mut lines, "exponent2")?;
    expect_section(&mut lines, "coefficient:")?;
    let coeff = read_hex_component(&mut lines, "coefficient")?;

    RsaKey::new(n, e, d, p, q, dmp1, dmq1, coeff)
}

fn expect_section<'a, I>(lines: &mut Peekable<I>, header: &'static str) -> Result<()>
where
    I: Iterator<Item = &'a str>,
{
    let line = lines.next().ok_or(Error::KeyFile {
        section: header,
        reason: "section header missing",
    })?;
    if !line.starts_with(header) {
        return Err(Error::KeyFile {
            section: header,
            reason: "unexpected line where the section header was expected",
        });
    }
    Ok(())
}

/// Collect the indented hex continuation lines of one section and parse them
/// as a single value, with the `:` separators and whitespace stripped.
fn read_hex_component<'a, I>(lines: &mut Peekable<I>, section: &'static str) -> Result<BigUint>
where
    I: Iterator<Item = &'a str>,
{
    let mut digits = String::new();
    while let Some(line) = lines.peek() {
        if !line.starts_with("    ") {
            break;
        }
        digits.extend(line.chars().filter(|c| *c != ':' && !c.is_whitespace()));
        lines.next();
    }
    if digits.is_empty() {
        return Err(Error::KeyFile {
            section,
            reason: "hex value missing",
        });
    }
    Ok(BigUint::from_hex_str(&digits)?)
}

/// The public exponent line carries a decimal value and a parenthesized hex
/// rendering; only the decimal field is read.
fn read_public_exponent<'a, I>(lines: &mut Peekable<I>) -> Result<BigUint>
where
    I: Iterator<Item = &'a str>,
{
    let line = lines.next().ok_or(Error::KeyFile {
        section: "publicExponent",
        reason: "section header missing",
    })?;
    let value = line.strip_prefix("publicExponent:").ok_or(Error::KeyFile {
        section: "publicExponent",
        reason: "unexpected line where the section header was expected",
    })?;
    let decimal = match value.find(" (") {
        Some(at) => &value[..at],
        None => value,
    };
    let decimal = decimal.trim();
    if decimal.is_empty() {
        return Err(Error::KeyFile {
            section: "publicExponent",
            reason: "value missing",
        });
    }
    Ok(BigUint::from_decimal_str(decimal)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::RSA_PUBLIC_EXPONENT;
    use rcrypt_bignum::Error as BignumError;

    const COMPONENTS: &str = include_str!("../tests/data/rsa_priv_components.txt");

    #[test]
    fn parses_a_full_component_dump() {
        let key = parse_components(COMPONENTS).unwrap();
        assert_eq!(key.modulus_width(), 128);
        assert_eq!(key.max_plain_len(), 117);
        assert_eq!(key.e, BigUint::from_u64(RSA_PUBLIC_EXPONENT as u64));
        // Spot-check the components against their known hex values.
        assert!(format!("{:x}", key.n).starts_with("97cf81be5f4ff175"));
        assert!(format!("{:x}", key.d).starts_with("2ecc6637b4942560"));
        assert!(format!("{:x}", key.p).starts_with("f51e30652bc5b16f"));
        assert!(format!("{:x}", key.coeff).ends_with("9f0eec75be"));
    }

    #[test]
    fn openssl_leading_zero_byte_does_not_change_the_value() {
        // The dump prints the modulus with a leading 00 byte (high bit set);
        // the parsed width must still be the real 128 bytes.
        let key = parse_components(COMPONENTS).unwrap();
        assert_eq!(key.n.byte_len(), 128);
    }

    #[test]
    fn missing_section_is_reported_by_name() {
        let truncated: String = COMPONENTS
            .lines()
            .take_while(|line| !line.starts_with("prime2:"))
            .map(|line| format!("{line}\n"))
            .collect();
        assert_eq!(
            parse_components(&truncated).err(),
            Some(Error::KeyFile {
                section: "prime2:",
                reason: "section header missing"
            })
        );
    }

    #[test]
    fn bad_hex_digit_is_rejected() {
        let corrupted = COMPONENTS.replacen("97:cf", "97:zf", 1);
        assert_eq!(
            parse_components(&corrupted).err(),
            Some(Error::Bignum(BignumError::InvalidDigit { ch: 'z', base: 16 }))
        );
    }

    #[test]
    fn misordered_sections_are_rejected() {
        let swapped = COMPONENTS.replacen("privateExponent:", "prime1:", 1);
        assert_eq!(
            parse_components(&swapped).err(),
            Some(Error::KeyFile {
                section: "privateExponent:",
                reason: "unexpected line where the section header was expected"
            })
        );
    }
}
