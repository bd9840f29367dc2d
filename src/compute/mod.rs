//! Compute module - Oracle scoring and evolutionary search.

mod oracle;

pub mod evolution;

pub use oracle::*;
