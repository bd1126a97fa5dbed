use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Message returned to callers that omit the document payload.
pub const MISSING_CONTENT: &str = "missing 'content' (base64)";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    MissingField(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn missing_content() -> Self {
        Self::MissingField(MISSING_CONTENT.to_string())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::InvalidBody(rejection) => rejection.status(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            Self::InvalidBody(rejection) => rejection.body_text(),
            other => other.to_string(),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
