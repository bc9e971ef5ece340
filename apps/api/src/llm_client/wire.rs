//! Request and response bodies of the `generateContent` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a request constrains the model's output.
///
/// The API rejects a response schema combined with tools, so a request
/// carries at most one of them. Free-text calls carry neither.
#[derive(Debug, Clone)]
pub enum OutputContract {
    FreeText,
    /// `generationConfig.responseSchema` with a JSON mime type.
    Schema(Value),
    /// The web-search tool. Output shape is only enforced by the prompt.
    SearchGrounded,
}

impl OutputContract {
    /// Whether the caller expects JSON back.
    pub fn expects_structured(&self) -> bool {
        !matches!(self, OutputContract::FreeText)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
}

impl GenerateContentRequest {
    pub fn new(system_prompt: &str, user_query: &str, contract: &OutputContract) -> Self {
        let (generation_config, tools) = match contract {
            OutputContract::FreeText => (None, None),
            OutputContract::Schema(schema) => (
                Some(GenerationConfig {
                    response_mime_type: "application/json".to_string(),
                    response_schema: schema.clone(),
                }),
                None,
            ),
            OutputContract::SearchGrounded => (
                None,
                Some(vec![Tool {
                    google_search: GoogleSearch {},
                }]),
            ),
        };

        Self {
            contents: vec![Content::text(user_query)],
            system_instruction: Content::text(system_prompt),
            generation_config,
            tools,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }
}
