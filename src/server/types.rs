use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /summarize`. Fields are kept untyped so a wrongly-typed
/// value is judged by the decoder rather than rejected as 422.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub content: Option<Value>,
    #[serde(default)]
    pub filename: Option<Value>,
}
