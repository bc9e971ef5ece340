//! Job search grounded in live web results.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::agents::prompts::{JOB_SEARCH_PROMPT_TEMPLATE, JOB_SEARCH_SYSTEM};
use crate::agents::{bind, run, AgentError};
use crate::llm_client::decoder::ModelOutput;
use crate::llm_client::wire::OutputContract;
use crate::llm_client::LlmClient;
use crate::models::job::NewJob;
use crate::models::profile::is_blank;

pub const EMPTY_QUERY: &str = "Please enter a search query.";

/// One listing found by the search tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchResult {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    pub source_uri: String,
}

impl From<JobSearchResult> for NewJob {
    fn from(result: JobSearchResult) -> Self {
        NewJob {
            job_title: result.job_title,
            company_name: result.company_name,
            job_description: result.job_description,
            source_uri: Some(result.source_uri),
        }
    }
}

/// Searches for active listings matching `query`.
///
/// No schema can accompany the search tool, so the shape is only bound
/// after decoding. No listings found is an empty list, not an error.
pub async fn search_jobs(query: &str, llm: &LlmClient) -> Result<Vec<JobSearchResult>, AgentError> {
    if is_blank(query) {
        return Err(AgentError::precondition(EMPTY_QUERY));
    }

    info!("Searching jobs for query '{}'", query.trim());
    let user_query = JOB_SEARCH_PROMPT_TEMPLATE.replace("{query}", query.trim());
    let output = run(llm, JOB_SEARCH_SYSTEM, &user_query, OutputContract::SearchGrounded).await?;

    let results: Vec<JobSearchResult> = match output {
        ModelOutput::Json(Value::Array(items)) if items.is_empty() => Vec::new(),
        other => bind("job search", other)?,
    };
    info!("Job search returned {} listings", results.len());
    Ok(results)
}
