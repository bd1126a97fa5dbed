use super::types::SummarizeRequest;
use crate::{
    Result,
    backend::Upload,
    decode,
    relay::{ClientResponse, Relay},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::any::Any;
use tracing::{error, instrument, warn};
use uuid::Uuid;

pub const HEALTH_BODY: &str = "proxy ok";

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

pub async fn health() -> &'static str {
    HEALTH_BODY
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn summarize(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<ClientResponse> {
    let Json(request) = payload.inspect_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
    })?;

    let bytes = decode::content_text(request.content.as_ref())
        .and_then(decode::decode_content)
        .inspect_err(|e| {
            warn!("Could not decode content: {}", e);
        })?;
    let filename = decode::resolve_filename(request.filename.as_ref());

    Ok(state.relay.forward(Upload::new(filename, bytes)).await)
}

/// Turns a panic inside a handler into a JSON 500 instead of a dropped connection.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    error!(panic_message = %message, "proxy error: handler panicked");

    ClientResponse::error(StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}
