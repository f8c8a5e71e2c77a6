use num_bigint::BigInt;
use thiserror::Error;

#[macro_export]
macro_rules! bail {
    ($e:expr) => {
        return Err($e);
    };
}

#[macro_export(local_inner_macros)]
macro_rules! ensure {
    ($cond:expr, $e:expr) => {
        if !($cond) {
            bail!($e);
        }
    };
}

pub type SecretResult<T> = Result<T, SecretError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SecretError {
    #[error("invalid digit string {digits:?} in base {base}: {reason}")]
    InvalidDigit {
        digits: String,
        base: u32,
        reason: String,
    },

    #[error("digit string has {len} digits, limit is {max}")]
    DigitStringTooLong { len: usize, max: usize },

    #[error("threshold k must be at least 1")]
    InvalidThreshold,

    #[error("need at least {needed} points, got {available}")]
    InsufficientPoints { needed: usize, available: usize },

    #[error("duplicate x coordinate {x}")]
    DuplicateX { x: i64 },

    #[error("division by the zero rational")]
    DivisionByZero,

    #[error("interpolated value {value} is not an integer")]
    NonIntegralResult { value: String },

    #[error("invalid point selection: {0}")]
    InvalidSelection(String),

    #[error("subset {subset:?} reconstructs {found}, expected {expected}")]
    InconsistentShares {
        expected: BigInt,
        found: String,
        subset: Vec<usize>,
    },

    #[error("malformed share document: {0}")]
    Document(String),
}

impl SecretError {
    pub(crate) fn invalid_digit(digits: &str, base: u32, reason: impl Into<String>) -> Self {
        SecretError::InvalidDigit {
            digits: digits.to_string(),
            base,
            reason: reason.into(),
        }
    }
}
