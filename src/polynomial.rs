use crate::sample::Sample;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use rand::RngCore;

/// An integer polynomial f(x) = a0 + a1*x + ... + a_{t-1}*x^{t-1}.
///
/// Used to produce sample points with a known constant term; evaluation is
/// exact over the integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poly {
    /// Coefficients a0, a1, ..., a_{t-1}
    pub coeffs: Vec<BigInt>,
}

impl Poly {
    /// Construct a polynomial from explicit coefficients.
    pub fn from_coeffs(coeffs: Vec<BigInt>) -> Self {
        Poly { coeffs }
    }

    /// Degree of the polynomial (t-1 if threshold is t).
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Threshold (number of coefficients).
    pub fn threshold(&self) -> usize {
        self.coeffs.len()
    }

    /// The constant term a0, i.e. f(0).
    pub fn constant(&self) -> BigInt {
        self.coeffs.first().cloned().unwrap_or_else(BigInt::zero)
    }

    /// Generates a random signed polynomial with `t` coefficients of up to
    /// `bytes * 8` bits each.
    pub fn random<R: RngCore>(t: usize, bytes: usize, rng: &mut R) -> Self {
        let mut coeffs = Vec::with_capacity(t);
        for _ in 0..t {
            let mut buf = vec![0u8; bytes];
            rng.fill_bytes(&mut buf);
            let sign = if rng.next_u32() & 1 == 1 {
                Sign::Minus
            } else {
                Sign::Plus
            };
            coeffs.push(BigInt::from_biguint(sign, BigUint::from_bytes_be(&buf)));
        }
        Poly { coeffs }
    }

    /// Evaluate the polynomial at x using Horner's method.
    pub fn eval(&self, x: &BigInt) -> BigInt {
        let mut result = BigInt::zero();
        for coeff in self.coeffs.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    /// The sample (x, f(x)), with f(x) written in `base`.
    pub fn sample_at(&self, x: i64, base: u32) -> Sample {
        let y = self.eval(&BigInt::from(x));
        let digits = y.to_str_radix(base);
        Sample::from_parts(x, y, &digits, base)
    }

    /// Samples at each of `xs`, all written in `base`.
    pub fn samples<I: IntoIterator<Item = i64>>(&self, xs: I, base: u32) -> Vec<Sample> {
        xs.into_iter().map(|x| self.sample_at(x, base)).collect()
    }
}
