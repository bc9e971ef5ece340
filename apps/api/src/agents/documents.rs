//! Free-text document generation: cover letters and tailored resume drafts.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agents::prompts::{
    COVER_LETTER_SYSTEM, DOCUMENT_CLOSING, DOCUMENT_PROFILE_HEADING, RESUME_DRAFT_SYSTEM,
};
use crate::agents::{profile_context, run, AgentError};
use crate::llm_client::decoder::{ModelOutput, NO_OUTPUT};
use crate::llm_client::prompts::{profile_and_job_query, GROUNDING_INSTRUCTION};
use crate::llm_client::wire::OutputContract;
use crate::llm_client::LlmClient;
use crate::models::job::Job;
use crate::models::profile::{is_blank, Profile};
use crate::profile::sanitize::sanitize;

pub const MISSING_INPUTS: &str = "Please ensure your profile is complete and a job is selected.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentType {
    CoverLetter,
    ResumeDraft,
}

impl DocumentType {
    fn system_prompt(self) -> &'static str {
        match self {
            DocumentType::CoverLetter => COVER_LETTER_SYSTEM,
            DocumentType::ResumeDraft => RESUME_DRAFT_SYSTEM,
        }
    }
}

/// Generates a document of `kind` from the sanitized profile and the job's
/// description. A reply with no text is `EmptyOutput`.
pub async fn generate_document(
    kind: DocumentType,
    profile: Option<Profile>,
    job: Option<&Job>,
    llm: &LlmClient,
) -> Result<String, AgentError> {
    let (Some(profile), Some(job)) = (profile, job) else {
        return Err(AgentError::precondition(MISSING_INPUTS));
    };

    info!("Generating {kind:?} for job {} ({})", job.id, job.job_title);
    let profile = sanitize(profile);
    let profile_json = profile_context(&profile)?;
    let user_query = profile_and_job_query(
        &job.job_description,
        &profile_json,
        DOCUMENT_PROFILE_HEADING,
        DOCUMENT_CLOSING,
    );
    let system_prompt = format!("{} {GROUNDING_INSTRUCTION}", kind.system_prompt());

    let text = match run(llm, &system_prompt, &user_query, OutputContract::FreeText).await? {
        ModelOutput::Text(text) => text,
        ModelOutput::Json(value) => value.to_string(),
    };
    if text == NO_OUTPUT || is_blank(&text) {
        return Err(AgentError::EmptyOutput);
    }

    info!("Generated {kind:?} ({} chars)", text.len());
    Ok(text)
}
