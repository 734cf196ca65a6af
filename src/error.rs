//! Error types for the SkyBlock API client
//!
//! Every failure is classified once, at the transport boundary, into an
//! [`ApiError`] and then propagated unchanged. Empty result sets are never
//! errors: aggregate helpers return `None` or `0.0` instead.

use thiserror::Error;

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur when talking to the SkyBlock API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint needs an API key and none is configured
    #[error("An API key is required for `{endpoint}` but none is configured")]
    MissingCredential { endpoint: String },

    /// HTTP 403: the configured API key is invalid or does not exist
    #[error("API key is invalid or does not exist")]
    InvalidCredential,

    /// HTTP 429
    #[error("API rate limit exceeded, try again later")]
    RateLimited,

    /// HTTP 503
    #[error("API is currently unavailable")]
    UpstreamUnavailable,

    /// HTTP 400 or 422: the request was missing or had invalid fields
    #[error("API rejected the request with status {status}")]
    BadRequest { status: u16 },

    /// HTTP 404
    #[error("Endpoint `{endpoint}` was not found")]
    NotFound { endpoint: String },

    /// Any other non-2xx status
    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// A 2xx body that could not be decoded into the expected shape
    #[error("Malformed response from `{endpoint}`: {message}")]
    MalformedResponse { endpoint: String, message: String },

    /// The body decoded but reported `success: false`
    #[error("API reported success=false for `{endpoint}`")]
    Unsuccessful { endpoint: String },

    /// The request never produced a response (connection, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The client configuration was rejected at construction
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: u16, endpoint: &str) -> Self {
        match status {
            429 => ApiError::RateLimited,
            403 => ApiError::InvalidCredential,
            503 => ApiError::UpstreamUnavailable,
            400 | 422 => ApiError::BadRequest { status },
            404 => ApiError::NotFound {
                endpoint: endpoint.to_string(),
            },
            other => ApiError::UnexpectedStatus(other),
        }
    }

    /// HTTP status code associated with this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::InvalidCredential => Some(403),
            ApiError::RateLimited => Some(429),
            ApiError::UpstreamUnavailable => Some(503),
            ApiError::BadRequest { status } => Some(*status),
            ApiError::NotFound { .. } => Some(404),
            ApiError::UnexpectedStatus(status) => Some(*status),
            ApiError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub(crate) fn malformed(endpoint: &str, err: impl std::fmt::Display) -> Self {
        ApiError::MalformedResponse {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }
}
