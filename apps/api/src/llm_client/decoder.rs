use serde_json::Value;
use thiserror::Error;
use tracing::error;

/// Returned in place of text when a free-text call yields no content.
pub const NO_OUTPUT: &str = "Generation failed to return text.";

/// Decoded model output.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    Text(String),
    Json(Value),
}

/// Structured output was requested but the text is not JSON, even with
/// code fences removed. `raw` is the model's text exactly as received.
#[derive(Debug, Error)]
#[error("model returned invalid JSON: {source}")]
pub struct DecodeError {
    pub raw: String,
    #[source]
    pub source: serde_json::Error,
}

/// Turns the raw candidate text into a `ModelOutput`.
///
/// Absent text is not an error: structured calls get an empty array and
/// free-text calls get [`NO_OUTPUT`].
pub fn decode(raw: Option<&str>, expects_structured: bool) -> Result<ModelOutput, DecodeError> {
    let Some(raw) = raw.filter(|t| !t.is_empty()) else {
        return Ok(if expects_structured {
            ModelOutput::Json(Value::Array(Vec::new()))
        } else {
            ModelOutput::Text(NO_OUTPUT.to_string())
        });
    };

    if !expects_structured {
        return Ok(ModelOutput::Text(raw.to_string()));
    }

    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        return Ok(ModelOutput::Json(value));
    }

    serde_json::from_str::<Value>(strip_code_fence(raw))
        .map(ModelOutput::Json)
        .map_err(|source| {
            error!("Failed to decode model JSON: {source}. Raw content: {raw}");
            DecodeError {
                raw: raw.to_string(),
                source,
            }
        })
}

/// Strips a leading ```` ``` ```` marker (with an optional language tag) and a
/// trailing ```` ``` ```` marker, plus surrounding whitespace.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let body = match text.strip_prefix("```") {
        Some(rest) => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
        None => text,
    };
    let body = body.trim();
    body.strip_suffix("```").unwrap_or(body).trim()
}
