//! Upstream flight-inventory client.
//!
//! [`SmilesClient`] issues one HTTP request per search key against the
//! Smiles flight-search API. It sits behind the [`FlightInventory`] trait so
//! the orchestrator and coordinator can be driven by test doubles
//! constructed in place of it.

use std::future::Future;

use log::debug;
use serde_json::Value;

use crate::config::Config;
use crate::error_handling::{categorize_reqwest_error, FetchError, InitializationError};
use crate::initialization::init_http_client;
use crate::models::{RawSearchResult, SearchKey};
use crate::search::bulk::search_bulk;

/// Capability of fetching raw search results from a flight inventory.
///
/// Implemented by [`SmilesClient`] for the real API and by scripted doubles
/// in tests. A fetch never fails across this boundary; failures are values
/// inside the returned [`RawSearchResult`].
pub trait FlightInventory {
    /// Issues exactly one upstream search for `key`.
    fn fetch(&self, key: &SearchKey) -> impl Future<Output = RawSearchResult> + Send;
}

/// Client for the Smiles flight-inventory API.
///
/// The API key and telemetry identifier are fixed at construction as default
/// request headers; the instance is immutable afterwards and safe to share
/// across concurrent fetches by reference.
pub struct SmilesClient {
    http: reqwest::Client,
    base_url: String,
}

impl SmilesClient {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an [`InitializationError`] if the credentials cannot be
    /// encoded as headers or the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let http = init_http_client(config)?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// Single-search convenience: builds one [`SearchKey`] and fetches it.
    #[allow(clippy::too_many_arguments)] // Mirrors the upstream search form
    pub async fn search_flights(
        &self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: chrono::NaiveDate,
        return_date: Option<chrono::NaiveDate>,
        adults: u32,
        children: u32,
        infants: u32,
    ) -> RawSearchResult {
        let key = SearchKey {
            origin: origin.into(),
            destination: destination.into(),
            departure_date,
            return_date,
            adults,
            children,
            infants,
        };
        self.fetch(&key).await
    }

    /// Batch form of [`Self::search_flights`]: one concurrent fetch per key,
    /// with `result[i]` corresponding to `keys[i]`.
    pub async fn search_flights_bulk(&self, keys: &[SearchKey]) -> Vec<RawSearchResult> {
        search_bulk(self, keys).await
    }

    fn query_params(key: &SearchKey) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("originAirportCode", key.origin.clone()),
            ("destinationAirportCode", key.destination.clone()),
            (
                "departureDate",
                key.departure_date.format("%Y-%m-%d").to_string(),
            ),
            ("adults", key.adults.to_string()),
            ("children", key.children.to_string()),
            ("infants", key.infants.to_string()),
            ("cabinType", "all".to_string()),
            ("forceCongener", "false".to_string()),
        ];
        if let Some(return_date) = key.return_date {
            params.push(("returnDate", return_date.format("%Y-%m-%d").to_string()));
        }
        params
    }

    async fn fetch_inner(&self, key: &SearchKey) -> Result<Value, FetchError> {
        debug!(
            "fetching {} -> {} departing {}",
            key.origin, key.destination, key.departure_date
        );

        let response = self
            .http
            .get(&self.base_url)
            .query(&Self::query_params(key))
            .send()
            .await
            .map_err(fetch_error)?;

        // Decoded unmodified; schema tolerance is the normalizer's job
        let payload = response
            .error_for_status()
            .map_err(fetch_error)?
            .json::<Value>()
            .await
            .map_err(fetch_error)?;

        Ok(payload)
    }
}

impl FlightInventory for SmilesClient {
    fn fetch(&self, key: &SearchKey) -> impl Future<Output = RawSearchResult> + Send {
        async move {
            let outcome = self.fetch_inner(key).await;
            if let Err(ref error) = outcome {
                debug!(
                    "fetch for {} departing {} failed: {}",
                    key.destination, key.departure_date, error
                );
            }
            RawSearchResult {
                key: key.clone(),
                outcome,
            }
        }
    }
}

fn fetch_error(error: reqwest::Error) -> FetchError {
    FetchError {
        error_type: categorize_reqwest_error(&error),
        message: error.to_string(),
    }
}
