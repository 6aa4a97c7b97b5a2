pub mod config;
pub mod gcd;
pub mod input;
pub mod normalize;
pub mod report;
pub mod runner;
pub mod solver;

pub use config::*;
pub use gcd::*;
pub use input::*;
pub use normalize::*;
pub use report::*;
pub use runner::*;
pub use solver::*;
