//! API handlers

pub mod greet;
pub mod stats;

pub use greet::*;
pub use stats::*;
