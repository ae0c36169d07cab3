//! Flight normalization.
//!
//! Turns one raw upstream payload into flat, comparable
//! [`CanonicalFlight`] records: walks the nested segment/itinerary
//! structure, selects the cheapest eligible fare per itinerary, and attaches
//! the booking deep link. Pure and synchronous; absence of any substructure
//! yields fewer records, never an error.

mod booking;

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::config::DEFAULT_ELIGIBLE_FARES;
use crate::models::CanonicalFlight;
use crate::payload::{FareOption, SearchPayload};

pub use booking::{date_to_timestamp_ms, generate_booking_url};

/// Normalizes one raw payload using the default fare allow-list.
pub fn extract_flights(payload: &Value, booking_url: &str) -> Vec<CanonicalFlight> {
    extract_flights_with(payload, booking_url, DEFAULT_ELIGIBLE_FARES)
}

/// Normalizes one raw payload into canonical flight records.
///
/// Itineraries are emitted in the order they appear in the payload; no
/// sorting. An itinerary with no fare in `eligible` is skipped, which is
/// policy rather than a defect: such offers cannot be priced in miles. A
/// payload that does not match the search schema at all contributes zero
/// records.
pub fn extract_flights_with(
    payload: &Value,
    booking_url: &str,
    eligible: &[&str],
) -> Vec<CanonicalFlight> {
    let decoded = SearchPayload::deserialize(payload).unwrap_or_else(|e| {
        debug!("payload did not match the search schema, treating as empty: {e}");
        SearchPayload::default()
    });

    let mut flights = Vec::new();
    for group in &decoded.requested_flight_segment_list {
        for itinerary in &group.flight_list {
            let Some(miles_cost) = cheapest_eligible_miles(&itinerary.fare_list, eligible) else {
                debug!(
                    "skipping itinerary {} -> {} with no eligible fare",
                    itinerary.departure.airport.code, itinerary.arrival.airport.code
                );
                continue;
            };

            flights.push(CanonicalFlight {
                airline: itinerary.airline.name.clone(),
                miles_cost,
                duration_hours: itinerary.duration.hours,
                duration_minutes: itinerary.duration.minutes,
                departure_airport: itinerary.departure.airport.code.clone(),
                departure_time: itinerary.departure.date.clone(),
                arrival_airport: itinerary.arrival.airport.code.clone(),
                arrival_time: itinerary.arrival.date.clone(),
                number_of_stops: itinerary.stops,
                booking_url: booking_url.to_string(),
            });
        }
    }
    flights
}

/// Minimum mile price across fares whose class token is in `eligible`.
///
/// Fares with other tokens are ignored for pricing but do not invalidate the
/// itinerary. Returns `None` when no eligible fare exists.
pub fn cheapest_eligible_miles(fares: &[FareOption], eligible: &[&str]) -> Option<u64> {
    fares
        .iter()
        .filter(|fare| eligible.contains(&fare.fare_type.as_str()))
        .map(|fare| fare.miles)
        .min()
}
