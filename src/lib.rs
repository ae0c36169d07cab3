//! miles_search library: award-flight search aggregation
//!
//! This library searches award-ticket flights (paid in frequent-flyer miles)
//! between two airports against the Smiles flight-inventory API, optionally
//! expanding the search across a window of nearby departure dates, and
//! returns a normalized list of flight offers with a booking deep link.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use miles_search::{Config, SearchCoordinator, SearchQuery, SmilesClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::new("my-api-key", "my-telemetry-id");
//! let client = SmilesClient::new(&config)?;
//! let coordinator = SearchCoordinator::new(client);
//!
//! let mut query = SearchQuery::exact_date(
//!     "CNF",
//!     "GRU",
//!     NaiveDate::from_ymd_opt(2025, 4, 10).expect("valid date"),
//! );
//! query.flexibility = 3;
//!
//! let report = coordinator.search(&query).await?;
//! println!(
//!     "Found {} flights across {} dates ({} failed)",
//!     report.flights.len(),
//!     report.dates_searched,
//!     report.dates_failed
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod normalize;
pub mod payload;
pub mod search;

// Re-export public API
pub use client::{FlightInventory, SmilesClient};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{ErrorType, FetchError, SearchError};
pub use models::{CanonicalFlight, RawSearchResult, SearchKey, SearchQuery, SearchReport};
pub use search::{expand_dates, SearchCoordinator};
