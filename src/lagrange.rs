//! Exact Lagrange interpolation over the rationals.
//!
//! For distinct x-values x_1..x_k the basis value at a target t is
//! ```text
//! L_i(t) = ∏_{j ≠ i} (t - x_j) / (x_i - x_j)
//! ```
//! and f(t) = ∑_i y_i · L_i(t) for the unique degree-(k-1) polynomial f
//! through the points. Every intermediate stays an exact [`Rational`]; only
//! the final sum is coerced to an integer.

use std::collections::HashSet;

use crate::ensure;
use crate::error::{SecretError, SecretResult};
use crate::rational::Rational;
use crate::sample::Sample;
use num_bigint::BigInt;
use num_traits::One;

/// Lagrange basis value L_i at `target` for the x-values `xs`.
pub fn lagrange_basis(i: usize, xs: &[i64], target: &Rational) -> SecretResult<Rational> {
    ensure!(
        i < xs.len(),
        SecretError::InvalidSelection(format!("basis index {} out of {} points", i, xs.len()))
    );
    check_distinct(xs)?;
    basis_unchecked(i, xs, target)
}

/// All basis values for `xs` at `target`, in the order of `xs`.
pub fn lagrange_coefficients(xs: &[i64], target: &Rational) -> SecretResult<Vec<Rational>> {
    check_distinct(xs)?;
    (0..xs.len())
        .map(|i| basis_unchecked(i, xs, target))
        .collect()
}

// Distinctness is checked by the callers; a repeat would surface as DivisionByZero.
fn basis_unchecked(i: usize, xs: &[i64], target: &Rational) -> SecretResult<Rational> {
    let x_i = BigInt::from(xs[i]);
    // numerator = ∏_{j != i} (t - x_j)
    let mut num = Rational::one();
    // denominator = ∏_{j != i} (x_i - x_j)
    let mut den = BigInt::one();
    for (j, &x_j) in xs.iter().enumerate() {
        if j == i {
            continue;
        }
        num = num * &(target - &Rational::from(x_j));
        den *= &x_i - BigInt::from(x_j);
    }
    num.checked_div(&Rational::from_integer(den))
}

/// Exact value at `target` of the polynomial through the first `k` points.
///
/// The result may be non-integral; see [`interpolate_at`] for the checked
/// integer form.
pub fn evaluate_at(points: &[Sample], k: usize, target: &Rational) -> SecretResult<Rational> {
    ensure!(k >= 1, SecretError::InvalidThreshold);
    ensure!(
        points.len() >= k,
        SecretError::InsufficientPoints {
            needed: k,
            available: points.len(),
        }
    );

    let chosen = &points[..k];
    let xs: Vec<i64> = chosen.iter().map(Sample::x).collect();
    check_distinct(&xs)?;

    let mut result = Rational::zero();
    for (i, sample) in chosen.iter().enumerate() {
        let lambda = basis_unchecked(i, &xs, target)?;
        let y = Rational::from_integer(sample.y().clone());
        result = result + &(y * &lambda);
    }
    Ok(result)
}

/// Value at `target` of the polynomial through the first `k` points,
/// failing with [`SecretError::NonIntegralResult`] unless it is an integer.
pub fn interpolate_at(points: &[Sample], k: usize, target: &Rational) -> SecretResult<BigInt> {
    evaluate_at(points, k, target)?.to_integer()
}

/// The secret: the constant term f(0) of the polynomial through the first
/// `k` points.
pub fn interpolate_constant(points: &[Sample], k: usize) -> SecretResult<BigInt> {
    interpolate_at(points, k, &Rational::zero())
}

pub(crate) fn check_distinct(xs: &[i64]) -> SecretResult<()> {
    let mut seen = HashSet::with_capacity(xs.len());
    for &x in xs {
        ensure!(seen.insert(x), SecretError::DuplicateX { x });
    }
    Ok(())
}
