//! The session client: bearer attachment and token-expiry recovery.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use folio_domain::{ApiRequest, ApiResponse, ClientConfig, HttpMethod, SessionTokens};

use crate::error::{ApiError, ApiResult};
use crate::ports::{HttpTransport, SessionExpiredHandler};
use crate::session::SessionContext;

/// Refresh endpoint; sent with credentials so the refresh cookie rides
/// along.
pub const REFRESH_PATH: &str = "/auth/refresh";

/// Current-user endpoint; a successful authenticated call here marks the
/// session active.
pub const CURRENT_USER_PATH: &str = "/users/me";

const AUTHORIZATION: &str = "Authorization";

/// HTTP client wrapper with automatic bearer attachment and a
/// single-shot recovery path for token expiry.
///
/// Callers never special-case authentication: a 401 triggers exactly one
/// silent refresh followed by exactly one retry of the original request.
/// A failed refresh is fatal to the session — the context is cleared,
/// the session-expired handler fires, and the caller receives the
/// original 401. All other failures propagate unchanged; nothing is ever
/// retried beyond the one 401-triggered attempt.
pub struct SessionClient<T: HttpTransport> {
    transport: Arc<T>,
    context: Arc<SessionContext>,
    config: ClientConfig,
    expired_handler: Arc<dyn SessionExpiredHandler>,
    /// Serializes refresh attempts so concurrent 401s coalesce into one
    /// network refresh.
    refresh_lock: Mutex<()>,
}

impl<T: HttpTransport> SessionClient<T> {
    /// Creates a session client.
    pub fn new(
        transport: Arc<T>,
        context: Arc<SessionContext>,
        config: ClientConfig,
        expired_handler: Arc<dyn SessionExpiredHandler>,
    ) -> Self {
        Self {
            transport,
            context,
            config,
            expired_handler,
            refresh_lock: Mutex::new(()),
        }
    }

    /// The session context this client reads and writes.
    #[must_use]
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Executes a request with bearer attachment and 401 recovery.
    ///
    /// # Errors
    ///
    /// - `ApiError::Http` for any failure status, including a 401 that
    ///   could not be recovered
    /// - `ApiError::Network` / `ApiError::Timeout` when no response was
    ///   received
    pub async fn request(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let mut request = request;
        if request.timeout_ms.is_none() {
            request.timeout_ms = Some(self.config.timeout_ms);
        }

        let bearer = self.context.bearer().await;
        let attempt = Self::with_bearer(request.clone(), bearer.as_deref());
        let response = self.transport.execute(attempt).await?;

        if response.is_success() {
            self.note_success(&request, bearer.is_some()).await;
            return Ok(response);
        }

        if response.is_unauthorized() {
            return self.recover_unauthorized(request, bearer, response).await;
        }

        Err(ApiError::from_response(&response))
    }

    /// Executes a request and decodes the 2xx body as JSON.
    ///
    /// # Errors
    ///
    /// As [`request`](Self::request), plus `ApiError::Decode` when the
    /// body does not parse as `D`.
    pub async fn request_json<D: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> ApiResult<D> {
        let response = self.request(request).await?;
        response.json().map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })
    }

    /// GET a path and decode the JSON body.
    ///
    /// # Errors
    ///
    /// As [`request_json`](Self::request_json).
    pub async fn get_json<D: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<D> {
        self.request_json(ApiRequest::get(path)).await
    }

    /// Attempts a silent refresh, returning the resulting bearer token.
    ///
    /// Used by the startup silent-login path. A failed refresh clears
    /// the session and fires the session-expired handler, exactly as in
    /// the 401 recovery path.
    ///
    /// # Errors
    ///
    /// The refresh endpoint's failure, after the session has been torn
    /// down.
    pub async fn refresh(&self) -> ApiResult<String> {
        let stale = self.context.bearer().await;
        match self.refresh_coalesced(stale.as_deref()).await {
            Ok(token) => Ok(token),
            Err(error) => {
                self.expire_session().await;
                Err(error)
            }
        }
    }

    /// 401 recovery: one refresh, one retry, then give up.
    async fn recover_unauthorized(
        &self,
        request: ApiRequest,
        stale_bearer: Option<String>,
        original: ApiResponse,
    ) -> ApiResult<ApiResponse> {
        debug!(path = %request.path, "request unauthorized; attempting token refresh");

        match self.refresh_coalesced(stale_bearer.as_deref()).await {
            Ok(token) => {
                let retry = Self::with_bearer(request.clone(), Some(&token));
                let response = self.transport.execute(retry).await?;
                if response.is_success() {
                    self.note_success(&request, true).await;
                    Ok(response)
                } else {
                    // One retry only; a second 401 is terminal.
                    Err(ApiError::from_response(&response))
                }
            }
            Err(refresh_error) => {
                debug!(error = %refresh_error, "token refresh failed");
                self.expire_session().await;
                // The caller sees the original failure, not the refresh's.
                Err(ApiError::from_response(&original))
            }
        }
    }

    /// Refreshes the token, coalescing concurrent attempts.
    ///
    /// `stale_bearer` is the token the caller last saw fail. After
    /// acquiring the lock, a caller whose token was already replaced by
    /// another task skips the network refresh and uses the new token.
    async fn refresh_coalesced(&self, stale_bearer: Option<&str>) -> ApiResult<String> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.context.bearer().await
            && Some(current.as_str()) != stale_bearer
        {
            debug!("token already refreshed by a concurrent request");
            return Ok(current);
        }

        self.refresh_now().await
    }

    /// One network refresh: POST the refresh endpoint, store the token.
    async fn refresh_now(&self) -> ApiResult<String> {
        let request =
            ApiRequest::post(REFRESH_PATH, json!({})).with_timeout_ms(self.config.timeout_ms);
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            return Err(ApiError::from_response(&response));
        }

        let tokens: SessionTokens = response.json().map_err(|e| ApiError::Decode {
            message: e.to_string(),
        })?;

        // Store before returning: the retry must never race a stale token.
        if let Err(error) = self.context.set_token(&tokens.access_token).await {
            warn!(error = %error, "failed to persist refreshed token");
        }
        info!("session token refreshed");
        Ok(tokens.access_token)
    }

    /// Tears down the session after an unrecoverable refresh failure.
    async fn expire_session(&self) {
        warn!("session expired; clearing state and redirecting to login");
        if let Err(error) = self.context.clear().await {
            warn!(error = %error, "failed to clear persisted session");
        }
        self.expired_handler
            .on_session_expired(&self.config.login_route);
    }

    /// A successful authenticated current-user call marks the session
    /// active.
    async fn note_success(&self, request: &ApiRequest, was_authenticated: bool) {
        if was_authenticated
            && request.method == HttpMethod::Get
            && request.path == CURRENT_USER_PATH
        {
            if let Err(error) = self.context.mark_session_active().await {
                warn!(error = %error, "failed to persist session-active flag");
            }
        }
    }

    /// Attaches (or strips) the bearer header.
    fn with_bearer(mut request: ApiRequest, bearer: Option<&str>) -> ApiRequest {
        match bearer {
            Some(token) => request.set_header(AUTHORIZATION, format!("Bearer {token}")),
            None => request.remove_header(AUTHORIZATION),
        }
        request
    }
}

impl<T: HttpTransport> std::fmt::Debug for SessionClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
