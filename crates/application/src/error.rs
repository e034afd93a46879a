//! Application error types.
//!
//! The taxonomy callers see: a server that answered with a failure
//! status (`Http`), a network that never answered (`Network`), a
//! client-side deadline (`Timeout`), and a 2xx body that did not parse
//! (`Decode`). The 401-with-successful-refresh path is recovered inside
//! the session client and never surfaces here.

use thiserror::Error;

use folio_domain::ApiResponse;

use crate::ports::TransportError;

/// Errors surfaced to callers of the session client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No response was received.
    #[error("network error: {message}")]
    Network {
        /// Underlying transport description.
        message: String,
    },

    /// The client-side deadline elapsed before a response arrived.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The deadline that elapsed.
        timeout_ms: u64,
    },

    /// The server responded with a failure status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// A 2xx response body did not decode as the expected type.
    #[error("failed to decode response: {message}")]
    Decode {
        /// Decoder description.
        message: String,
    },
}

impl ApiError {
    /// Builds the `Http` variant from a failure response.
    #[must_use]
    pub fn from_response(response: &ApiResponse) -> Self {
        Self::Http {
            status: response.status,
            body: response.text(),
        }
    }

    /// The HTTP status, when the server responded.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for an HTTP 401.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Timeout { timeout_ms } => Self::Timeout { timeout_ms },
            TransportError::Connect { message }
            | TransportError::InvalidUrl { message }
            | TransportError::Other { message } => Self::Network { message },
        }
    }
}

/// Result type alias for session client operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn transport_timeout_maps_to_timeout() {
        let error: ApiError = TransportError::Timeout { timeout_ms: 5_000 }.into();
        assert_eq!(error, ApiError::Timeout { timeout_ms: 5_000 });
    }

    #[test]
    fn transport_connect_maps_to_network() {
        let error: ApiError = TransportError::Connect {
            message: "connection refused".to_string(),
        }
        .into();
        assert!(matches!(error, ApiError::Network { .. }));
    }

    #[test]
    fn http_error_carries_status_and_body() {
        let response = ApiResponse::new(429, std::collections::HashMap::new(), b"slow down".to_vec());
        let error = ApiError::from_response(&response);
        assert_eq!(error.status(), Some(429));
        assert_eq!(
            error,
            ApiError::Http {
                status: 429,
                body: "slow down".to_string()
            }
        );
    }

    #[test]
    fn unauthorized_detection() {
        let error = ApiError::Http {
            status: 401,
            body: String::new(),
        };
        assert!(error.is_unauthorized());
        assert!(!ApiError::Timeout { timeout_ms: 1 }.is_unauthorized());
    }
}
