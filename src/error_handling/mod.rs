//! Error handling and search statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Search statistics tracking (errors and info metrics)
//!
//! Failure values are categorized into:
//! - **Errors**: Transport/HTTP failures of individual upstream fetches
//! - **Info**: Notable outcomes that aren't errors (empty results, partial
//!   bulk failures)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{ErrorType, FetchError, InfoType, InitializationError, SearchError};
