//! Handlers 模块

pub mod imports;
pub mod inspections;
pub mod metrics;
pub mod rooms;
pub mod session;
pub mod towers;

pub use imports::*;
pub use inspections::*;
pub use metrics::*;
pub use rooms::*;
pub use session::*;
pub use towers::*;
