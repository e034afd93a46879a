//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. The client keeps a
//! cookie jar so the HTTP-only refresh cookie set by the backend rides
//! along on refresh calls.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Url};

use folio_application::ports::{HttpTransport, TransportError};
use folio_domain::{ApiRequest, ApiResponse, HttpMethod};

/// HTTP transport backed by `reqwest::Client`.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Creates a transport for the given API base URL.
    ///
    /// Configuration:
    /// - Cookie jar enabled (carries the refresh cookie)
    /// - Follow redirects: up to 10
    /// - User-Agent: "Folio/<version>"
    ///
    /// Timeouts are applied per request, not on the client, so per-call
    /// overrides work.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built.
    pub fn new(base_url: Url) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(concat!("Folio/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other {
                message: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    /// Creates a transport with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Joins a request path onto the base URL.
    ///
    /// The base URL's own path is preserved: a base of
    /// `https://host/api` and a path of `/wallets` yield
    /// `https://host/api/wallets`.
    fn join_url(&self, path: &str) -> Result<Url, TransportError> {
        let joined = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| TransportError::InvalidUrl {
            message: format!("{joined}: {e}"),
        })
    }

    /// Converts the domain method to a reqwest method.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Maps reqwest errors to transport errors.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            return TransportError::Connect {
                message: error.to_string(),
            };
        }

        TransportError::Other {
            message: error.to_string(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.join_url(&request.path)?;
        let timeout_ms = request.timeout_ms.unwrap_or(ApiRequest::DEFAULT_TIMEOUT_MS);

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(Duration::from_millis(timeout_ms));

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::Other {
                message: format!("failed to read body: {e}"),
            })?
            .to_vec();

        Ok(ApiResponse::new(status, headers, body))
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
