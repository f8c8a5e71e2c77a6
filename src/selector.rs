//! Choosing which k samples to interpolate, and optionally checking that
//! other k-subsets agree.

use std::collections::HashSet;

use crate::ensure;
use crate::error::{SecretError, SecretResult};
use crate::lagrange::{check_distinct, interpolate_constant};
use crate::sample::Sample;
use num_bigint::BigInt;

/// Order in which samples are considered; the evaluator uses the first k.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionOrder {
    /// Input order, as supplied by the caller.
    #[default]
    AsGiven,
    /// Stable sort by ascending x.
    AscendingX,
    /// Exactly these input indices first, in this order; the remaining
    /// samples follow in input order.
    Explicit(Vec<usize>),
}

/// Opt-in cross-validation across k-subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossCheck {
    #[default]
    Disabled,
    /// Test up to this many k-subsets (at least two) in lexicographic
    /// order of their positions.
    Subsets(usize),
}

/// Reorder `points` according to `order`. Only the first `k` of the result
/// determine the secret.
pub fn select(points: &[Sample], k: usize, order: &SelectionOrder) -> SecretResult<Vec<Sample>> {
    ensure!(k >= 1, SecretError::InvalidThreshold);
    ensure!(
        points.len() >= k,
        SecretError::InsufficientPoints {
            needed: k,
            available: points.len(),
        }
    );

    match order {
        SelectionOrder::AsGiven => Ok(points.to_vec()),
        SelectionOrder::AscendingX => {
            let mut sorted = points.to_vec();
            sorted.sort_by_key(Sample::x);
            Ok(sorted)
        }
        SelectionOrder::Explicit(indices) => {
            ensure!(
                indices.len() == k,
                SecretError::InvalidSelection(format!(
                    "{} indices given for threshold {}",
                    indices.len(),
                    k
                ))
            );
            let mut picked = HashSet::with_capacity(k);
            for &i in indices {
                ensure!(
                    i < points.len(),
                    SecretError::InvalidSelection(format!(
                        "index {} out of {} points",
                        i,
                        points.len()
                    ))
                );
                ensure!(
                    picked.insert(i),
                    SecretError::InvalidSelection(format!("index {} listed twice", i))
                );
            }
            let mut ordered: Vec<Sample> = indices.iter().map(|&i| points[i].clone()).collect();
            ordered.extend(
                points
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !picked.contains(i))
                    .map(|(_, s)| s.clone()),
            );
            Ok(ordered)
        }
    }
}

/// Reconstruct from the first `k` points, then recompute from further
/// k-subsets (lexicographic by position, up to `limit` subsets in total)
/// and require every one of them to agree.
pub fn cross_validate(points: &[Sample], k: usize, limit: usize) -> SecretResult<BigInt> {
    let expected = interpolate_constant(points, k)?;
    if points.len() == k {
        return Ok(expected);
    }

    let xs: Vec<i64> = points.iter().map(Sample::x).collect();
    check_distinct(&xs)?;

    // The first combination is the primary subset, already computed.
    for subset in Combinations::new(points.len(), k).skip(1).take(limit.max(2) - 1) {
        let chosen: Vec<Sample> = subset.iter().map(|&i| points[i].clone()).collect();
        let found = match interpolate_constant(&chosen, k) {
            Ok(value) if value == expected => continue,
            Ok(value) => value.to_string(),
            Err(SecretError::NonIntegralResult { value }) => value,
            Err(e) => return Err(e),
        };
        return Err(SecretError::InconsistentShares {
            expected,
            found,
            subset,
        });
    }
    Ok(expected)
}

/// k-element index subsets of `0..n` in lexicographic order.
struct Combinations {
    n: usize,
    current: Option<Vec<usize>>,
}

impl Combinations {
    fn new(n: usize, k: usize) -> Self {
        let current = if k <= n { Some((0..k).collect()) } else { None };
        Self { n, current }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let out = self.current.take()?;
        let k = out.len();
        let mut next = out.clone();
        // Rightmost position that can still be bumped.
        let mut i = k;
        while i > 0 {
            i -= 1;
            if next[i] < self.n - k + i {
                next[i] += 1;
                for j in i + 1..k {
                    next[j] = next[j - 1] + 1;
                }
                self.current = Some(next);
                break;
            }
        }
        Some(out)
    }
}
