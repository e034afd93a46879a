//! HTTP transport port.

use async_trait::async_trait;
use thiserror::Error;

use folio_domain::{ApiRequest, ApiResponse};

/// Failures below the HTTP layer: the request never produced a response.
///
/// A server that answered with a failure status is *not* a transport
/// error; the response is returned as-is and classified by the session
/// client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The client-side deadline elapsed.
    #[error("timed out after {timeout_ms} ms")]
    Timeout {
        /// The deadline that elapsed.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {message}")]
    Connect {
        /// Underlying description.
        message: String,
    },

    /// The request URL could not be built.
    #[error("invalid URL: {message}")]
    InvalidUrl {
        /// Underlying description.
        message: String,
    },

    /// Any other transport-level failure.
    #[error("transport error: {message}")]
    Other {
        /// Underlying description.
        message: String,
    },
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP implementation so the session logic
/// can be exercised against a scripted fake in tests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// Implementations must return `Ok` for any received response,
    /// whatever its status; `Err` is reserved for requests that never
    /// produced one.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` when no response was received.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
