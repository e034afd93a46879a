//! Scripted fakes for exercising the session logic without a network.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use folio_domain::{ApiRequest, ApiResponse};

use crate::ports::{HttpTransport, SessionExpiredHandler, TransportError};

/// Transport that replays a scripted sequence of results and records
/// every request it was handed.
#[derive(Debug, Default)]
pub(crate) struct ScriptedTransport {
    script: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a bodyless response with the given status.
    pub(crate) fn push_status(&self, status: u16) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::with_status(status)));
    }

    /// Queues a JSON response.
    pub(crate) fn push_json(&self, status: u16, body: &Value) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::json_body(status, body)));
    }

    /// Queues a transport failure.
    pub(crate) fn push_error(&self, error: TransportError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Every request executed so far, in order.
    pub(crate) fn recorded(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::Other {
                    message: "no scripted response left".to_string(),
                })
            })
    }
}

/// Session-expired handler that records the routes it was asked to
/// redirect to.
#[derive(Debug, Default)]
pub(crate) struct RecordingExpiredHandler {
    routes: Mutex<Vec<String>>,
}

impl RecordingExpiredHandler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl SessionExpiredHandler for RecordingExpiredHandler {
    fn on_session_expired(&self, login_route: &str) {
        self.routes.lock().unwrap().push(login_route.to_string());
    }
}
