//! Resume parsing: raw resume text in, reconciled profile out.

use tracing::info;

use crate::agents::prompts::{RESUME_PARSE_PROMPT_TEMPLATE, RESUME_PARSE_SYSTEM};
use crate::agents::schemas::resume_parse_schema;
use crate::agents::{bind, run, AgentError};
use crate::llm_client::prompts::SCHEMA_OUTPUT_INSTRUCTION;
use crate::llm_client::wire::OutputContract;
use crate::llm_client::LlmClient;
use crate::models::profile::{is_blank, Profile};
use crate::models::resume::ResumeParseResult;
use crate::profile::reconcile::reconcile;

pub const EMPTY_RESUME: &str = "Please paste your resume text before running the parser.";

/// Extracts structured data from `resume_text` without merging it.
pub async fn extract_resume(
    resume_text: &str,
    llm: &LlmClient,
) -> Result<ResumeParseResult, AgentError> {
    if is_blank(resume_text) {
        return Err(AgentError::precondition(EMPTY_RESUME));
    }

    info!("Parsing resume ({} chars)", resume_text.len());
    let user_query = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let system_prompt = format!("{RESUME_PARSE_SYSTEM} {SCHEMA_OUTPUT_INSTRUCTION}");

    let output = run(
        llm,
        &system_prompt,
        &user_query,
        OutputContract::Schema(resume_parse_schema()),
    )
    .await?;
    bind("resume parse", output)
}

/// Parses the resume and merges the result into `current`.
/// The caller decides whether to persist the returned profile.
pub async fn parse_resume(
    resume_text: &str,
    current: Profile,
    llm: &LlmClient,
) -> Result<Profile, AgentError> {
    let parsed = extract_resume(resume_text, llm).await?;
    let profile = reconcile(parsed, current);
    info!(
        "Resume parsed: {} skills, {} experience entries",
        profile.skills.len(),
        profile.experience.len()
    );
    Ok(profile)
}
