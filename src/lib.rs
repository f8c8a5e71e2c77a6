//! Exact recovery of a polynomial's constant term from threshold sample
//! points whose y-values arrive as digit strings in bases 2 to 36.

pub mod error;

pub mod decoder;
pub mod document;
pub mod lagrange;
pub mod polynomial;
pub mod rational;
pub mod reconstruct;
pub mod sample;
pub mod selector;

pub use error::{SecretError, SecretResult};
pub use reconstruct::{EncodedShare, ReconstructionConfig, Reconstructor, Secret};
pub use sample::Sample;
