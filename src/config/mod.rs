//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, booking-link parameters, defaults)
//! - The library [`Config`] struct and logging enums

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
