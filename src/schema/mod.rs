//! Schema module - Configuration and result types for guessing game runs.

mod config;
mod evolution;

pub use config::*;
pub use evolution::*;
