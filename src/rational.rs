use std::fmt::{self, Debug};
use std::ops::{Add, Mul, Neg, Sub};

use crate::ensure;
use crate::error::{SecretError, SecretResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// An exact fraction of arbitrary-precision integers.
///
/// Values are kept in lowest terms with a strictly positive denominator, so
/// structural equality is numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numer, self.denom)
    }
}

impl Rational {
    /// Construct `numer / denom`, reduced. Fails when `denom` is zero.
    pub fn new(numer: BigInt, denom: BigInt) -> SecretResult<Self> {
        ensure!(!denom.is_zero(), SecretError::DivisionByZero);
        Ok(Self::reduced(numer, denom))
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numer: value,
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Divide by `rhs`, failing on the zero rational.
    pub fn checked_div(&self, rhs: &Rational) -> SecretResult<Rational> {
        ensure!(!rhs.is_zero(), SecretError::DivisionByZero);
        Ok(Self::reduced(
            &self.numer * &rhs.denom,
            &self.denom * &rhs.numer,
        ))
    }

    /// The integer value, if the reduced denominator is exactly one.
    pub fn to_integer(&self) -> SecretResult<BigInt> {
        ensure!(
            self.is_integer(),
            SecretError::NonIntegralResult {
                value: self.to_string(),
            }
        );
        Ok(self.numer.clone())
    }

    // Caller guarantees denom != 0.
    fn reduced(numer: BigInt, denom: BigInt) -> Self {
        let (mut numer, mut denom) = if denom.is_negative() {
            (-numer, -denom)
        } else {
            (numer, denom)
        };
        let g = numer.gcd(&denom);
        if !g.is_one() && !g.is_zero() {
            numer /= &g;
            denom /= &g;
        }
        if numer.is_zero() {
            denom = BigInt::one();
        }
        Self { numer, denom }
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;
    fn add(self, rhs: &Rational) -> Rational {
        if self.denom == rhs.denom {
            return Rational::reduced(&self.numer + &rhs.numer, self.denom.clone());
        }
        Rational::reduced(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Add<&Rational> for Rational {
    type Output = Self;
    fn add(self, rhs: &Self) -> Self {
        &self + rhs
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;
    fn sub(self, rhs: &Rational) -> Rational {
        if self.denom == rhs.denom {
            return Rational::reduced(&self.numer - &rhs.numer, self.denom.clone());
        }
        Rational::reduced(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub<&Rational> for Rational {
    type Output = Self;
    fn sub(self, rhs: &Self) -> Self {
        &self - rhs
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;
    fn mul(self, rhs: &Rational) -> Rational {
        Rational::reduced(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Mul<&Rational> for Rational {
    type Output = Self;
    fn mul(self, rhs: &Self) -> Self {
        &self * rhs
    }
}

impl Neg for Rational {
    type Output = Self;
    fn neg(self) -> Self {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
