//! Partner-site booking deep links.
//!
//! The partner expects the departure date encoded as epoch milliseconds of
//! the date at 15:00:00, and a fixed set of query parameters in a fixed
//! order. Both are load-bearing: the link is handed directly to the end user
//! and must match the partner's parser byte for byte.

use chrono::NaiveDate;

use crate::config::{BOOKING_URL_BASE, DEPARTURE_ANCHOR_HOUR};

/// Encodes a departure date as the partner's millisecond timestamp.
///
/// The anchor is 15:00:00 on the given date, not midnight, interpreted in
/// UTC so the function is pure and deterministic: the same date always
/// yields the same timestamp. 2025-03-26 yields `1743001200000`.
pub fn date_to_timestamp_ms(date: NaiveDate) -> i64 {
    let anchor = date
        .and_hms_opt(DEPARTURE_ANCHOR_HOUR, 0, 0)
        .expect("anchor hour is a valid time of day");
    anchor.and_utc().timestamp_millis()
}

/// Builds the partner-site deep link for one (origin, destination, date).
///
/// Cabin and passenger-mix query parameters are fixed defaults; the partner
/// re-asks for them during checkout.
pub fn generate_booking_url(origin: &str, destination: &str, departure_date: NaiveDate) -> String {
    format!(
        "{BOOKING_URL_BASE}?cabin=ALL&adults=1&children=0&infants=0&searchType=g3\
         &segments=1&tripType=2&originAirport={origin}&destinationAirport={destination}\
         &departureDate={timestamp}",
        timestamp = date_to_timestamp_ms(departure_date)
    )
}
