//! Forwards decoded documents to the backend and maps every outcome to a
//! response for the original caller.

use crate::backend::{BackendResponse, SummarizeBackend, Upload};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info, warn};

const LOG_PREVIEW_CHARS: usize = 120;
const NON_JSON_BODY_CHARS: usize = 500;

/// Final status and JSON body sent back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ClientResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }
}

impl IntoResponse for ClientResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Clone)]
pub struct Relay {
    backend: Arc<dyn SummarizeBackend>,
}

impl Relay {
    pub fn new(backend: Arc<dyn SummarizeBackend>) -> Self {
        Self { backend }
    }

    pub fn target(&self) -> &str {
        self.backend.target()
    }

    /// Performs exactly one backend call. Never fails: transport errors
    /// become a 500 response.
    pub async fn forward(&self, upload: Upload) -> ClientResponse {
        info!(
            to = %self.backend.target(),
            bytes = upload.bytes.len(),
            "→ forwarding"
        );

        match self.backend.summarize(upload).await {
            Ok(response) => {
                info!(
                    status = response.status.as_u16(),
                    preview = %truncate_chars(&response.body, LOG_PREVIEW_CHARS),
                    "← backend"
                );
                map_backend_response(response)
            }
            Err(e) => {
                error!(to = %self.backend.target(), "proxy error: {}", e);
                ClientResponse::error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}

/// JSON bodies pass through with the backend status untouched, error
/// statuses included. Anything else is replaced by a diagnostic object.
pub fn map_backend_response(response: BackendResponse) -> ClientResponse {
    match serde_json::from_str::<Value>(&response.body) {
        Ok(body) => ClientResponse::new(response.status, body),
        Err(e) => {
            warn!(
                status = response.status.as_u16(),
                "backend returned non-JSON body: {}", e
            );
            ClientResponse::new(
                response.status,
                json!({
                    "error": "backend non-JSON",
                    "body": truncate_chars(&response.body, NON_JSON_BODY_CHARS),
                }),
            )
        }
    }
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
