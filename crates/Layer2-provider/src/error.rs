//! Provider-specific error types
//!
//! ProviderError carries the detail of a completion endpoint failure.
//! Conversion into the foundation Error collapses every variant into a
//! hard 500-class provider failure; no upstream error is retried.

use scriptforge_foundation::Error as FoundationError;
use thiserror::Error;

/// Errors that can occur while talking to the completion endpoint
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    /// Credential rejected by the endpoint
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    /// Server error (5xx)
    #[error("Server error: {0}")]
    ServerError(String),

    /// Network error (connection failed, DNS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid request (bad parameters)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response from the endpoint (undecodable body, no choices)
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Unknown error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ProviderError {
    /// Create from HTTP status code and body
    pub fn from_http_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ProviderError::Authentication(body.to_string()),
            429 => ProviderError::RateLimited(body.to_string()),
            400 => ProviderError::InvalidRequest(body.to_string()),
            500..=599 => ProviderError::ServerError(body.to_string()),
            _ => ProviderError::Unknown(format!("HTTP {}: {}", status, body)),
        }
    }
}

// ============================================================================
// scriptforge_foundation::Error conversion
// ============================================================================

impl From<ProviderError> for FoundationError {
    fn from(err: ProviderError) -> Self {
        FoundationError::Provider(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_status() {
        assert!(matches!(
            ProviderError::from_http_status(401, "bad key"),
            ProviderError::Authentication(_)
        ));
        assert!(matches!(
            ProviderError::from_http_status(429, "slow down"),
            ProviderError::RateLimited(_)
        ));
        assert!(matches!(
            ProviderError::from_http_status(503, "unavailable"),
            ProviderError::ServerError(_)
        ));
        assert!(matches!(
            ProviderError::from_http_status(418, "teapot"),
            ProviderError::Unknown(_)
        ));
    }

    #[test]
    fn test_foundation_conversion_is_provider_class() {
        let err: FoundationError = ProviderError::Network("connection refused".to_string()).into();
        assert!(matches!(err, FoundationError::Provider(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
