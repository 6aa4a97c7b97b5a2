use std::path::PathBuf;
use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for Frobenius
#[derive(Error, Debug)]
pub enum FrobeniusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Arithmetic overflow: sum of {value} and {generator} does not fit in 64 bits")]
    Overflow { value: u64, generator: u64 },

    #[error("Result {0} does not fit in a signed 64-bit integer")]
    ResultOverflow(u64),

    #[error("Too many generators: {count} nonzero values (max: {max})")]
    TooManyGenerators { count: usize, max: usize },

    #[error("Anchor too large: smallest generator is {anchor} (max: {max})")]
    AnchorTooLarge { anchor: u64, max: u64 },

    #[error("Cannot allocate a residue table of {anchor} slots")]
    TableAllocation { anchor: u64 },

    #[error("Solver task failed: {0}")]
    TaskFailed(String),

    #[error("Failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// A value that cannot be used as a generator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("generator must be non-negative, got {0}")]
    Negative(i64),

    #[error("generator must be an integer, got {0}")]
    NotInteger(f64),

    #[error("generator {0} is too large")]
    OutOfRange(f64),
}

/// Errors raised while reading generator rows
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Input must be positive integers separated by commas (e.g. '1,2,3'), got '{0}'")]
    Malformed(String),

    #[error("Value '{0}' does not fit in 64 bits")]
    ValueTooLarge(String),

    #[error("File must be csv format: {0}")]
    UnsupportedFile(PathBuf),

    #[error("Failed to read input file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("Input file {0} contains no rows")]
    Empty(PathBuf),
}

pub type Result<T> = std::result::Result<T, FrobeniusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        assert_eq!(
            DomainError::Negative(-3).to_string(),
            "generator must be non-negative, got -3"
        );
        assert_eq!(
            DomainError::NotInteger(2.5).to_string(),
            "generator must be an integer, got 2.5"
        );
    }

    #[test]
    fn test_domain_error_converts() {
        let err: FrobeniusError = DomainError::Negative(-1).into();
        assert!(matches!(err, FrobeniusError::Domain(DomainError::Negative(-1))));
        assert!(err.to_string().starts_with("Domain error:"));
    }

    #[test]
    fn test_input_error_display() {
        let err = InputError::Malformed("1,,2".to_string());
        assert!(err.to_string().contains("'1,,2'"));

        let err = InputError::UnsupportedFile(PathBuf::from("units.txt"));
        assert_eq!(err.to_string(), "File must be csv format: units.txt");
    }

    #[test]
    fn test_limit_error_display() {
        let err = FrobeniusError::TooManyGenerators { count: 30, max: 25 };
        assert_eq!(err.to_string(), "Too many generators: 30 nonzero values (max: 25)");
    }
}
