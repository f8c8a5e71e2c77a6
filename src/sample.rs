use crate::decoder::{decode, decode_bounded};
use crate::error::SecretResult;
use num_bigint::BigInt;

/// One share: a point `(x, y)` on the hidden polynomial, together with the
/// digit string and base its `y` value was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    x: i64,
    y: BigInt,
    digits: String,
    base: u32,
}

impl Sample {
    /// Decode `digits` in `base` into the sample's `y` value.
    pub fn decode(x: i64, base: u32, digits: &str) -> SecretResult<Self> {
        let y = decode(digits, base)?;
        Ok(Self::from_parts(x, y, digits, base))
    }

    /// Same as [`Sample::decode`] with a cap on the digit count.
    pub fn decode_bounded(
        x: i64,
        base: u32,
        digits: &str,
        max_digits: usize,
    ) -> SecretResult<Self> {
        let y = decode_bounded(digits, base, max_digits)?;
        Ok(Self::from_parts(x, y, digits, base))
    }

    /// A sample whose `y` is already known; recorded as base-10 digits.
    pub fn from_integer(x: i64, y: BigInt) -> Self {
        let digits = y.to_str_radix(10);
        Self {
            x,
            y,
            digits,
            base: 10,
        }
    }

    /// Caller guarantees `digits` in `base` decodes to `y`.
    pub(crate) fn from_parts(x: i64, y: BigInt, digits: &str, base: u32) -> Self {
        Self {
            x,
            y,
            digits: digits.to_string(),
            base,
        }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// The digit string exactly as supplied.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn base(&self) -> u32 {
        self.base
    }
}
