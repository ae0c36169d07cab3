//! Core data model.
//!
//! Defines the search key sent upstream, the raw per-date search outcome,
//! and the normalized flight record returned to callers.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::error_handling::FetchError;

/// One concrete (origin, destination, date, passenger-mix) tuple sent to the
/// upstream API. Multiple keys are derived from one user request when the
/// flexibility window is non-zero.
///
/// Immutable once built; cloned freely between the orchestrator and the
/// per-date results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKey {
    /// Origin IATA code (3 letters, uppercase)
    pub origin: String,
    /// Destination IATA code (3 letters, uppercase)
    pub destination: String,
    /// Departure calendar date (no time component)
    pub departure_date: NaiveDate,
    /// Optional return date for round trips
    pub return_date: Option<NaiveDate>,
    /// Adult passenger count (at least 1)
    pub adults: u32,
    /// Child passenger count
    pub children: u32,
    /// Infant passenger count
    pub infants: u32,
}

impl SearchKey {
    /// Builds a one-way key for a single adult, the shape produced by the
    /// coordinator's date-window expansion.
    pub fn one_way(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: NaiveDate,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date,
            return_date: None,
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

/// Outcome of one upstream fetch for one [`SearchKey`].
///
/// The payload is the decoded upstream JSON, unmodified; schema tolerance is
/// the normalizer's job. A failure is a value, not an exception, so one
/// failed date never disturbs its bulk-search neighbors.
#[derive(Debug, Clone)]
pub struct RawSearchResult {
    /// The key this result corresponds to.
    pub key: SearchKey,
    /// Decoded payload, or the categorized fetch failure.
    pub outcome: Result<Value, FetchError>,
}

/// One normalized, comparable flight offer.
///
/// Constructed once by the normalizer from one raw itinerary entry and
/// immutable thereafter. Timestamps are passed through verbatim from the
/// upstream payload, never reformatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalFlight {
    /// Airline display name, e.g. "GOL (G3)"
    pub airline: String,
    /// Cheapest eligible fare for this itinerary, in miles
    pub miles_cost: u64,
    /// Whole hours of flight duration
    pub duration_hours: u32,
    /// Minutes of flight duration beyond the whole hours
    pub duration_minutes: u32,
    /// Departure airport IATA code
    pub departure_airport: String,
    /// Departure timestamp, ISO-8601 local, verbatim from upstream
    pub departure_time: String,
    /// Arrival airport IATA code
    pub arrival_airport: String,
    /// Arrival timestamp, ISO-8601 local, verbatim from upstream
    pub arrival_time: String,
    /// Number of stops (0 for nonstop)
    pub number_of_stops: u32,
    /// Partner-site deep link pre-filled with the trip parameters
    pub booking_url: String,
}

/// One user-level search request, before date-window expansion.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Origin IATA code (validated non-empty 3-letter token by the caller)
    pub origin: String,
    /// Destination IATA code
    pub destination: String,
    /// Base departure date
    pub departure_date: NaiveDate,
    /// Number of additional departure dates to search after the base date
    pub flexibility: u32,
    /// Adult passenger count (at least 1)
    pub adults: u32,
    /// Child passenger count
    pub children: u32,
    /// Infant passenger count
    pub infants: u32,
}

impl SearchQuery {
    /// Builds a one-adult query for the exact date only (flexibility 0).
    pub fn exact_date(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: NaiveDate,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date,
            flexibility: 0,
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

/// Aggregate result of one coordinated search.
///
/// Flights are concatenated in date-candidate order; no sort order is
/// imposed beyond that. Failed dates are observable through `dates_failed`
/// without failing the overall search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// Normalized flights across all successful dates, in candidate order.
    pub flights: Vec<CanonicalFlight>,
    /// Number of departure dates searched (flexibility + 1).
    pub dates_searched: usize,
    /// Number of dates whose upstream fetch failed and was skipped.
    pub dates_failed: usize,
}
