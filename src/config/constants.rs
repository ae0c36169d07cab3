//! Configuration constants.
//!
//! This module defines the fixed parameters of the upstream flight-inventory
//! API and the partner booking site, plus operational defaults.

/// Default endpoint of the Smiles flight-inventory search API.
///
/// One GET request is issued against this URL per searched departure date.
/// Overridable through [`crate::config::Config::api_base_url`], which the
/// tests use to point the client at a local server.
pub const SMILES_API_URL: &str =
    "https://api-air-flightsearch-green.smiles.com.br/v1/airlines/search";

/// Base of the partner booking deep link handed back to the end user.
///
/// The full link is produced by [`crate::normalize::generate_booking_url`]
/// and must stay byte-for-byte compatible with the partner site's expected
/// query-string keys and value encoding.
pub const BOOKING_URL_BASE: &str = "https://www.smiles.com.br/mfe/emissao-passagem/";

/// Hour of day (UTC) the partner site expects as the anchor time of the
/// `departureDate` millisecond timestamp in booking deep links.
///
/// The partner encodes a calendar date as the epoch milliseconds of that
/// date at 15:00:00, not midnight. 2025-03-26 encodes as `1743001200000`.
pub const DEPARTURE_ANCHOR_HOUR: u32 = 15;

/// Fare-class tokens whose mile prices participate in cheapest-fare
/// selection. Fares carrying any other token are ignored for pricing but do
/// not invalidate their itinerary.
pub const DEFAULT_ELIGIBLE_FARES: &[&str] = &["SMILES", "SMILES_CLUB"];

/// Per-request HTTP timeout in seconds.
///
/// The upstream search can take tens of seconds on busy routes. This bounds
/// a single fetch; the bulk join barrier imposes no timeout of its own.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the upstream API key.
pub const API_KEY_ENV: &str = "SMILES_API_KEY";

/// Environment variable holding the upstream telemetry identifier.
pub const TELEMETRY_ID_ENV: &str = "SMILES_TELEMETRY_ID";

/// Header carrying the API key on every upstream request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Header carrying the telemetry identifier on every upstream request.
pub const TELEMETRY_HEADER: &str = "x-strackid";
