//! Turns the inbound `content` field into raw document bytes.

use crate::{Error, Result};
use base64::{
    Engine,
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use serde_json::Value;

pub const DEFAULT_FILENAME: &str = "upload.pdf";

/// Standard alphabet; rejects invalid symbols but accepts payloads with or
/// without trailing `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Returns the base64 portion of `content`: everything after the last comma,
/// or the whole string when there is no comma (e.g. `data:<mime>;base64,<data>`).
pub fn payload_text(content: &str) -> &str {
    match content.rfind(',') {
        Some(idx) => &content[idx + 1..],
        None => content,
    }
}

/// `null`, `false`, `0` and `""` count as absent.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Extracts the `content` field as text. Blank values are `None`; any other
/// non-string value is an internal fault.
pub fn content_text(content: Option<&Value>) -> Result<Option<&str>> {
    match content {
        None => Ok(None),
        Some(value) if is_blank(value) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(Error::internal(format!(
            "'content' must be a base64 string, got {}",
            value_kind(other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn decode_content(content: Option<&str>) -> Result<Vec<u8>> {
    let content = content.unwrap_or_default();
    if content.is_empty() {
        return Err(Error::missing_content());
    }

    let payload: String = payload_text(content)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if payload.is_empty() {
        return Err(Error::missing_content());
    }

    Ok(PAYLOAD_ENGINE.decode(payload.as_bytes())?)
}

/// Caller-supplied filename, stringified when it is not a string. Blank
/// values fall back to `upload.pdf`.
pub fn resolve_filename(filename: Option<&Value>) -> String {
    match filename {
        Some(value) if !is_blank(value) => match value {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        },
        _ => DEFAULT_FILENAME.to_string(),
    }
}
