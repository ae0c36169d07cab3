//! HTTP client initialization.
//!
//! This module builds the `reqwest::Client` used for all upstream search
//! requests.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::ClientBuilder;

use crate::config::{Config, API_KEY_HEADER, TELEMETRY_HEADER};
use crate::error_handling::InitializationError;

/// Initializes the upstream HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - The API key and telemetry identifier as default headers, fixed at
///   construction and attached to every request
/// - Per-request timeout from the config
///
/// The returned client is immutable and cheap to share across concurrent
/// fetches.
///
/// # Errors
///
/// Returns `InitializationError::CredentialError` if a credential contains
/// bytes invalid in an HTTP header, or `HttpClientError` if client
/// construction fails.
pub fn init_http_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(API_KEY_HEADER),
        header_value(&config.api_key)?,
    );
    headers.insert(
        HeaderName::from_static(TELEMETRY_HEADER),
        header_value(&config.telemetry_id)?,
    );

    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .default_headers(headers)
        .build()?;
    Ok(client)
}

fn header_value(raw: &str) -> Result<HeaderValue, InitializationError> {
    HeaderValue::from_str(raw).map_err(|e| InitializationError::CredentialError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_http_client_accepts_plain_credentials() {
        let config = Config::new("fake-api-key", "fake-telemetry");
        assert!(init_http_client(&config).is_ok());
    }

    #[test]
    fn test_init_http_client_rejects_invalid_header_bytes() {
        let config = Config::new("key-with-\nnewline", "telemetry");
        let result = init_http_client(&config);
        assert!(matches!(
            result,
            Err(InitializationError::CredentialError(_))
        ));
    }
}
