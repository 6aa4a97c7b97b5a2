pub mod solve;
pub mod validate;

pub use solve::*;
pub use validate::*;
