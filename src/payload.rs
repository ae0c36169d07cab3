//! Typed mirror of the upstream search payload.
//!
//! The upstream API returns deeply nested JSON. Every field here is
//! `#[serde(default)]` so that a payload missing any substructure decodes to
//! empty collections and empty strings instead of failing; a date with zero
//! flight-segment groups simply contributes zero flights.

use serde::Deserialize;

/// Top-level search response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchPayload {
    /// Flight-segment groups, one per requested segment.
    pub requested_flight_segment_list: Vec<FlightSegmentGroup>,
}

/// One requested flight segment with its candidate itineraries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightSegmentGroup {
    /// Itineraries offered for this segment.
    pub flight_list: Vec<Itinerary>,
}

/// One upstream-reported flight option.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Itinerary {
    /// Operating airline descriptor.
    pub airline: Airline,
    /// Fare options for this itinerary, across all fare classes.
    pub fare_list: Vec<FareOption>,
    /// Total travel duration.
    pub duration: FlightDuration,
    /// Departure endpoint.
    pub departure: Endpoint,
    /// Arrival endpoint.
    pub arrival: Endpoint,
    /// Number of stops (0 for nonstop).
    pub stops: u32,
}

/// Airline descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Airline {
    /// Display name, e.g. "GOL (G3)".
    pub name: String,
}

/// A fare-class label and its mile price.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FareOption {
    /// Fare-class token, e.g. "SMILES" or "SMILES_CLUB".
    #[serde(rename = "type")]
    pub fare_type: String,
    /// Price in miles.
    pub miles: u64,
}

/// Duration split into whole hours and remaining minutes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlightDuration {
    /// Whole hours.
    pub hours: u32,
    /// Remaining minutes.
    pub minutes: u32,
}

/// Departure or arrival descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    /// Airport reference.
    pub airport: AirportRef,
    /// ISO-8601 local timestamp string, passed through verbatim.
    pub date: String,
}

/// Airport reference inside an endpoint descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AirportRef {
    /// IATA code, uppercase.
    pub code: String,
}
