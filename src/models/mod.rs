pub mod config;
pub mod generator;
pub mod report;

pub use config::*;
pub use generator::*;
pub use report::*;
