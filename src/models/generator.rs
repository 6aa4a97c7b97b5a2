//! Generator values accepted by the solver

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A non-negative integer usable as a generator
///
/// The solver itself works on `u64`; this type is the checked boundary for
/// values that arrive as signed or floating-point numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generator(u64);

impl From<u64> for Generator {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Generator> for u64 {
    fn from(generator: Generator) -> Self {
        generator.0
    }
}

impl TryFrom<i64> for Generator {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::Negative(value))
    }
}

impl TryFrom<i32> for Generator {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<f64> for Generator {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(DomainError::NotInteger(value));
        }
        if value < 0.0 {
            return Err(DomainError::Negative(value as i64));
        }
        // 2^64 is exactly representable; anything at or above it is out of range
        if value >= 18_446_744_073_709_551_616.0 {
            return Err(DomainError::OutOfRange(value));
        }
        Ok(Self(value as u64))
    }
}
