//! Frobenius - largest unreachable value for a set of positive integers
//!
//! Frobenius is a CLI tool that computes the Frobenius number of one or more
//! generator sets, read from a command-line literal or a CSV file.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (solve, validate)
//! - **core**: Core functionality (gcd, normalization, residue-table solver, input, runner, report)
//! - **models**: Data structures (config, generator, report)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use crate::core::{solve, try_solve};
pub use error::{FrobeniusError, Result};
