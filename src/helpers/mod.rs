//! Helper Utilities
//!
//! Common utilities used across the crate.

mod fs;
mod logging;
mod memo;

pub use fs::*;
pub use logging::*;
pub use memo::*;
