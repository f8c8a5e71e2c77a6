//! Decoding of arbitrary-base digit strings into exact big integers.

use crate::error::{SecretError, SecretResult};
use crate::ensure;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Smallest accepted base.
pub const MIN_BASE: u32 = 2;
/// Largest accepted base (digits `0-9` then `a-z`).
pub const MAX_BASE: u32 = 36;

/// Decode `digits` written in `base` into an exact integer.
///
/// Accepts an optional leading `+` or `-` and the case-insensitive digit
/// alphabet `0-9a-z` restricted to the first `base` symbols. The length of
/// the string is unbounded; see [`decode_bounded`] to cap it.
///
/// ```
/// use secret_finder::decoder::decode;
/// use num_bigint::BigInt;
///
/// assert_eq!(decode("ff", 16).unwrap(), BigInt::from(255));
/// assert_eq!(decode("-z", 36).unwrap(), BigInt::from(-35));
/// assert!(decode("", 10).is_err());
/// ```
pub fn decode(digits: &str, base: u32) -> SecretResult<BigInt> {
    let (sign, body) = split_sign(digits);
    let magnitude = decode_magnitude(digits, body, base)?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// Like [`decode`], but rejects digit bodies longer than `max_digits`
/// before doing any arithmetic.
pub fn decode_bounded(digits: &str, base: u32, max_digits: usize) -> SecretResult<BigInt> {
    let (_, body) = split_sign(digits);
    ensure!(
        body.len() <= max_digits,
        SecretError::DigitStringTooLong {
            len: body.len(),
            max: max_digits,
        }
    );
    decode(digits, base)
}

fn split_sign(digits: &str) -> (Sign, &str) {
    if let Some(rest) = digits.strip_prefix('-') {
        (Sign::Minus, rest)
    } else if let Some(rest) = digits.strip_prefix('+') {
        (Sign::Plus, rest)
    } else {
        (Sign::Plus, digits)
    }
}

fn decode_magnitude(original: &str, body: &str, base: u32) -> SecretResult<BigUint> {
    ensure!(
        (MIN_BASE..=MAX_BASE).contains(&base),
        SecretError::invalid_digit(original, base, "base out of range [2, 36]")
    );
    ensure!(
        !body.is_empty(),
        SecretError::invalid_digit(original, base, "no digits")
    );

    // Validate every symbol up front, the radix parser in num-bigint also
    // tolerates `_` separators which are not part of our alphabet.
    let mut values = Vec::with_capacity(body.len());
    for (pos, c) in body.chars().enumerate() {
        match c.to_digit(base) {
            Some(d) => values.push(d as u8),
            None => {
                return Err(SecretError::invalid_digit(
                    original,
                    base,
                    format!("{:?} at position {} is not a base-{} digit", c, pos, base),
                ))
            }
        }
    }

    // `from_radix_be` only returns None for out-of-range digits, which were
    // rejected above.
    let magnitude = BigUint::from_radix_be(&values, base).unwrap_or_else(BigUint::zero);
    Ok(magnitude)
}
