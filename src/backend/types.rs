use axum::http::StatusCode;
use serde_json::json;

/// Page cap sent to the summarizer with every upload.
pub const MAX_PAGES: u32 = 12;

/// A decoded document ready to be forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }
}

/// Raw result of a completed backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Contents of the `json` multipart field.
pub fn control_field() -> String {
    json!({ "max_pages": MAX_PAGES }).to_string()
}
