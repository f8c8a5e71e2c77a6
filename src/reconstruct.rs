use std::fmt;

use crate::error::SecretResult;
use crate::lagrange::interpolate_constant;
use crate::sample::Sample;
use crate::selector::{cross_validate, select, CrossCheck, SelectionOrder};
use log::debug;
use num_bigint::BigInt;

/// Default cap on the number of digits accepted per share value.
pub const DEFAULT_MAX_DIGITS: usize = 4096;

/// The recovered constant term. Never narrowed to a fixed-width type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Secret(BigInt);

impl Secret {
    pub fn value(&self) -> &BigInt {
        &self.0
    }

    pub fn into_inner(self) -> BigInt {
        self.0
    }

    pub fn to_str_radix(&self, radix: u32) -> String {
        self.0.to_str_radix(radix)
    }
}

impl From<BigInt> for Secret {
    fn from(value: BigInt) -> Self {
        Secret(value)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A share as it arrives from outside: x, the base, and the digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedShare {
    pub x: i64,
    pub base: u32,
    pub digits: String,
}

impl EncodedShare {
    pub fn new(x: i64, base: u32, digits: impl Into<String>) -> Self {
        Self {
            x,
            base,
            digits: digits.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructionConfig {
    pub selection: SelectionOrder,
    pub cross_check: CrossCheck,
    /// Longest accepted digit string, sign excluded.
    pub max_digits: usize,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            selection: SelectionOrder::AsGiven,
            cross_check: CrossCheck::Disabled,
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }
}

/// Applies a [`ReconstructionConfig`] to sample sets. Holds no state
/// between calls.
#[derive(Debug, Clone, Default)]
pub struct Reconstructor {
    config: ReconstructionConfig,
}

impl Reconstructor {
    pub fn new(config: ReconstructionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconstructionConfig {
        &self.config
    }

    /// Recover the secret from already decoded samples.
    pub fn reconstruct(&self, samples: &[Sample], k: usize) -> SecretResult<Secret> {
        let ordered = select(samples, k, &self.config.selection)?;
        let value = match self.config.cross_check {
            CrossCheck::Disabled => interpolate_constant(&ordered, k)?,
            CrossCheck::Subsets(limit) => {
                debug!("cross-checking up to {} subsets of {} samples", limit, ordered.len());
                cross_validate(&ordered, k, limit)?
            }
        };
        Ok(Secret(value))
    }

    /// Decode every share (honouring `max_digits`), then reconstruct.
    pub fn reconstruct_encoded(&self, shares: &[EncodedShare], k: usize) -> SecretResult<Secret> {
        let samples = self.decode_all(shares)?;
        self.reconstruct(&samples, k)
    }

    pub fn decode_all(&self, shares: &[EncodedShare]) -> SecretResult<Vec<Sample>> {
        shares
            .iter()
            .map(|s| Sample::decode_bounded(s.x, s.base, &s.digits, self.config.max_digits))
            .collect()
    }
}
