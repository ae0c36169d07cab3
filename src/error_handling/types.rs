//! Error type definitions.
//!
//! This module defines all error and info types used throughout the
//! application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A credential contains bytes that cannot be sent as an HTTP header.
    #[error("Invalid credential header value: {0}")]
    CredentialError(String),
}

/// Failure of a single upstream fetch, scoped to one search key.
///
/// Carried inside [`crate::models::RawSearchResult`] rather than raised, so
/// one failed date never aborts its bulk-search neighbors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    /// Categorized failure kind, used for statistics.
    pub error_type: ErrorType,
    /// Opaque upstream/transport message for logging.
    pub message: String,
}

/// Errors surfaced by the search coordinator.
///
/// Individual date failures are absorbed into the aggregate result; only a
/// total failure of the bulk search escalates here.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Every searched date failed with a transport error. Distinct from a
    /// successful search that found zero flights.
    #[error("all {attempted} flight searches failed (last error: {last_error})")]
    AllSearchesFailed {
        /// Number of search keys attempted.
        attempted: usize,
        /// Message of the last observed fetch failure.
        last_error: String,
    },
}

/// Types of errors that can occur during an upstream fetch.
///
/// Categorizes transport and HTTP-status failures of individual search
/// requests for statistics tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ErrorType {
    /// Request could not be constructed.
    HttpRequestBuilderError,
    /// Non-success HTTP status with no more specific category.
    HttpRequestStatusError,
    /// Request exceeded the configured timeout.
    HttpRequestTimeoutError,
    /// Request failed while being sent.
    HttpRequestRequestError,
    /// TCP/TLS connection could not be established.
    HttpRequestConnectError,
    /// Response body could not be read.
    HttpRequestBodyError,
    /// Response body was not valid JSON.
    HttpRequestDecodeError,
    /// Any other transport failure.
    HttpRequestOtherError,
    /// 429 Too Many Requests.
    HttpRequestTooManyRequests,
    /// 401 Unauthorized (bad or missing API key).
    HttpRequestUnauthorized,
    /// 404 Not Found.
    HttpRequestNotFound,
    /// 500 Internal Server Error.
    HttpRequestInternalServerError,
    /// 503 Service Unavailable.
    HttpRequestServiceUnavailable,
    /// 504 Gateway Timeout.
    HttpRequestGatewayTimeout,
}

/// Informational metrics that aren't errors.
///
/// Notable search outcomes worth tracking without failing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum InfoType {
    /// An upstream search succeeded but reported zero itineraries.
    EmptySearchResult,
    /// A bulk search lost some dates to transport failures but not all.
    PartialFailure,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::HttpRequestTooManyRequests => "Too many requests (429)",
            ErrorType::HttpRequestUnauthorized => "Unauthorized (401)",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestInternalServerError => "Internal Server Error (500)",
            ErrorType::HttpRequestServiceUnavailable => "Service Unavailable (503)",
            ErrorType::HttpRequestGatewayTimeout => "Gateway Timeout (504)",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::EmptySearchResult => "Empty search result",
            InfoType::PartialFailure => "Partial bulk-search failure",
        }
    }
}
