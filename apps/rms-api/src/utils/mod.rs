//! Utils 模块

pub mod response;
pub mod validation;

pub use response::*;
pub use validation::*;
