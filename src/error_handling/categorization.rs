//! Error categorization.
//!
//! This module maps transport-layer failures onto the [`ErrorType`] taxonomy
//! used for statistics tracking.

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an [`ErrorType`].
///
/// HTTP status codes take precedence over the reqwest error kind so that a
/// 429 surfaced through `error_for_status()` counts as rate limiting rather
/// than a generic status error.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    // Check HTTP status codes first
    if let Some(status) = error.status() {
        match status.as_u16() {
            401 => return ErrorType::HttpRequestUnauthorized,
            404 => return ErrorType::HttpRequestNotFound,
            429 => return ErrorType::HttpRequestTooManyRequests,
            500 => return ErrorType::HttpRequestInternalServerError,
            503 => return ErrorType::HttpRequestServiceUnavailable,
            504 => return ErrorType::HttpRequestGatewayTimeout,
            _ if status.is_client_error() || status.is_server_error() => {
                return ErrorType::HttpRequestStatusError;
            }
            _ => {
                // Non-error status wrapped in an error - fall through
            }
        }
    }

    // Check reqwest error kinds
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_status() {
        ErrorType::HttpRequestStatusError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

// Note: Testing categorize_reqwest_error requires real reqwest::Error
// instances, which can only be produced by an actual HTTP exchange. The
// status-code mapping is exercised end-to-end in the client unit tests,
// which run against an httptest server.
