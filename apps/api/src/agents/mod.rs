//! Agent operations: search, refine, parse, generate.
//!
//! Each operation pairs a fixed system prompt with a per-call user query and
//! one `OutputContract`, runs it through `LlmClient::execute`, and binds the
//! decoded value to its Rust type. Outcomes are tagged per contract via
//! `AgentError` so handlers match exhaustively.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::llm_client::decoder::ModelOutput;
use crate::llm_client::wire::{GenerateContentRequest, OutputContract};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::Profile;

pub mod documents;
pub mod handlers;
pub mod prompts;
pub mod refine;
pub mod resume_parse;
pub mod schemas;
pub mod search;

#[derive(Debug, Error)]
pub enum AgentError {
    /// Required input missing; no network call was made.
    #[error("{0}")]
    Precondition(String),

    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Valid JSON that does not match the contract's shape.
    #[error("{contract} output did not match the expected shape: {source}")]
    Contract {
        contract: &'static str,
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("The model returned no output")]
    EmptyOutput,

    /// The profile could not be serialized into prompt context.
    #[error("Failed to serialize profile context: {0}")]
    ProfileContext(#[source] serde_json::Error),
}

impl AgentError {
    pub(crate) fn precondition(message: &str) -> Self {
        AgentError::Precondition(message.to_string())
    }
}

/// Pretty-printed profile JSON for embedding in a prompt.
pub(crate) fn profile_context(profile: &Profile) -> Result<String, AgentError> {
    serde_json::to_string_pretty(profile).map_err(AgentError::ProfileContext)
}

/// Builds and executes one contract-bound call.
pub(crate) async fn run(
    llm: &LlmClient,
    system_prompt: &str,
    user_query: &str,
    contract: OutputContract,
) -> Result<ModelOutput, AgentError> {
    let request = GenerateContentRequest::new(system_prompt, user_query, &contract);
    Ok(llm.execute(&request, contract.expects_structured()).await?)
}

/// Binds structured output to `T`. An absent or empty-array result maps to
/// `EmptyOutput`.
pub(crate) fn bind<T: DeserializeOwned>(
    contract: &'static str,
    output: ModelOutput,
) -> Result<T, AgentError> {
    let value = match output {
        ModelOutput::Json(Value::Array(items)) if items.is_empty() => {
            return Err(AgentError::EmptyOutput)
        }
        ModelOutput::Json(value) => value,
        ModelOutput::Text(text) => Value::String(text),
    };

    T::deserialize(&value).map_err(|source| {
        let raw = value.to_string();
        error!("{contract} output did not match the expected shape: {source}; raw: {raw}");
        AgentError::Contract {
            contract,
            raw,
            source,
        }
    })
}
