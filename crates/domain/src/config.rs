//! Client configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};

/// Route the user is sent to when the session cannot be recovered.
pub const DEFAULT_LOGIN_ROUTE: &str = "/login-register";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for a session client instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL all request paths are joined against.
    pub base_url: Url,
    /// Default per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Route handed to the session-expired handler.
    pub login_route: String,
}

impl ClientConfig {
    /// Creates a configuration for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBaseUrl` if the URL does not parse or
    /// is not http(s).
    pub fn new(base_url: &str) -> DomainResult<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| DomainError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(DomainError::InvalidBaseUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        Ok(Self {
            base_url: url,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        })
    }

    /// Overrides the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeout` for a zero timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> DomainResult<Self> {
        if timeout_ms == 0 {
            return Err(DomainError::InvalidTimeout(
                "timeout must be greater than zero".to_string(),
            ));
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    /// Overrides the login route.
    #[must_use]
    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ClientConfig::new("https://api.example.com").unwrap();
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.login_route, DEFAULT_LOGIN_ROUTE);
    }

    #[test]
    fn rejects_malformed_url() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(DomainError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            ClientConfig::new("ftp://api.example.com"),
            Err(DomainError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ClientConfig::new("https://api.example.com").unwrap();
        assert!(matches!(
            config.with_timeout_ms(0),
            Err(DomainError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn overrides_apply() {
        let config = ClientConfig::new("https://api.example.com")
            .unwrap()
            .with_timeout_ms(5_000)
            .unwrap()
            .with_login_route("/signin");
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.login_route, "/signin");
    }
}
