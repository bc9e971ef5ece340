//! Profile refinement: compares the profile with a job description and
//! suggests how to tailor it.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::agents::prompts::{PROFILE_REFINE_CLOSING, PROFILE_REFINE_SYSTEM};
use crate::agents::schemas::profile_refine_schema;
use crate::agents::{bind, profile_context, run, AgentError};
use crate::llm_client::prompts::{profile_and_job_query, SCHEMA_OUTPUT_INSTRUCTION};
use crate::llm_client::wire::OutputContract;
use crate::llm_client::LlmClient;
use crate::models::job::Job;
use crate::models::profile::{is_blank, Profile};
use crate::profile::sanitize::sanitize;

pub const NO_JOB_SELECTED: &str = "Please select a job description to analyze against.";
pub const INCOMPLETE_PROFILE: &str =
    "Please complete your professional summary and add some skills before refining.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRefinement {
    pub summary_suggestion: String,
    /// 5-8 expected.
    pub key_skills_to_highlight: Vec<String>,
    /// 3-5 expected.
    pub missing_keywords: Vec<String>,
}

pub async fn refine_profile(
    profile: Profile,
    job: Option<&Job>,
    llm: &LlmClient,
) -> Result<ProfileRefinement, AgentError> {
    let job = job.ok_or_else(|| AgentError::precondition(NO_JOB_SELECTED))?;
    let profile = sanitize(profile);
    if is_blank(&profile.summary) || profile.skills.is_empty() {
        return Err(AgentError::precondition(INCOMPLETE_PROFILE));
    }

    info!("Refining profile against job {} ({})", job.id, job.job_title);
    let profile_json = profile_context(&profile)?;
    let user_query = profile_and_job_query(
        &job.job_description,
        &profile_json,
        "MY CURRENT PROFESSIONAL PROFILE",
        PROFILE_REFINE_CLOSING,
    );
    let system_prompt = format!("{PROFILE_REFINE_SYSTEM} {SCHEMA_OUTPUT_INSTRUCTION}");

    let output = run(
        llm,
        &system_prompt,
        &user_query,
        OutputContract::Schema(profile_refine_schema()),
    )
    .await?;
    let refinement: ProfileRefinement = bind("profile refinement", output)?;

    info!(
        "Refinement ready: {} skills to highlight, {} missing keywords",
        refinement.key_skills_to_highlight.len(),
        refinement.missing_keywords.len()
    );
    Ok(refinement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{ok_text, ScriptedTransport};
    use crate::models::profile::{Education, Project};
    use chrono::Utc;
    use uuid::Uuid;

    fn job() -> Job {
        Job {
            id: Uuid::new_v4(),
            job_title: "Data Engineer".to_string(),
            company_name: "Acme".to_string(),
            job_description: "Spark, Airflow, Python".to_string(),
            source_uri: None,
            date_saved: Utc::now(),
        }
    }

    fn profile() -> Profile {
        Profile {
            summary: "Backend engineer".to_string(),
            skills: vec!["Python".to_string(), "  ".to_string()],
            ..Profile::default()
        }
    }

    const REFINEMENT: &str = r#"{
        "summarySuggestion": "Lead with pipeline work.",
        "keySkillsToHighlight": ["Python", "SQL", "ETL", "Airflow", "Spark"],
        "missingKeywords": ["Spark", "Airflow", "dbt"]
    }"#;

    #[tokio::test]
    async fn test_refine_sends_schema_and_sanitized_profile() {
        let transport = ScriptedTransport::new(vec![ok_text(REFINEMENT)]);
        let llm = LlmClient::with_transport(transport.clone());

        let refinement = refine_profile(profile(), Some(&job()), &llm).await.unwrap();
        assert_eq!(refinement.missing_keywords, vec!["Spark", "Airflow", "dbt"]);

        let body = &transport.requests()[0];
        assert!(body.get("tools").is_none());
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert!(body["generationConfig"]["responseSchema"]["properties"]
            .get("missingKeywords")
            .is_some());

        let query = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(query.starts_with("JOB DESCRIPTION (JD):\nSpark, Airflow, Python"));
        assert!(query.contains("\"Python\""));
        assert!(!query.contains("\"  \""));
    }

    #[tokio::test]
    async fn test_refine_context_includes_projects_and_education() {
        let transport = ScriptedTransport::new(vec![ok_text(REFINEMENT)]);
        let llm = LlmClient::with_transport(transport.clone());
        let profile = Profile {
            projects: vec![
                Project {
                    project_name: "KafkaStreamer".to_string(),
                    ..Project::default()
                },
                Project::default(),
            ],
            education: vec![Education {
                degree: "MSc Distributed Systems".to_string(),
                ..Education::default()
            }],
            ..profile()
        };

        refine_profile(profile, Some(&job()), &llm).await.unwrap();

        let body = &transport.requests()[0];
        let query = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(query.contains("KafkaStreamer"));
        assert!(query.contains("MSc Distributed Systems"));
        assert_eq!(query.matches("\"projectName\"").count(), 1);
    }

    #[tokio::test]
    async fn test_missing_job_makes_no_call() {
        let transport = ScriptedTransport::new(vec![]);
        let llm = LlmClient::with_transport(transport.clone());

        let err = refine_profile(profile(), None, &llm).await.unwrap_err();
        assert!(matches!(err, AgentError::Precondition(ref m) if m == NO_JOB_SELECTED));
        assert_eq!(transport.attempts(), 0);
    }

    #[tokio::test]
    async fn test_profile_without_skills_makes_no_call() {
        let transport = ScriptedTransport::new(vec![]);
        let llm = LlmClient::with_transport(transport.clone());
        let profile = Profile {
            summary: "Backend engineer".to_string(),
            skills: vec![String::new()],
            ..Profile::default()
        };

        let err = refine_profile(profile, Some(&job()), &llm).await.unwrap_err();
        assert!(matches!(err, AgentError::Precondition(ref m) if m == INCOMPLETE_PROFILE));
        assert_eq!(transport.attempts(), 0);
    }

    #[tokio::test]
    async fn test_missing_content_is_empty_output() {
        let transport = ScriptedTransport::new(vec![crate::llm_client::testing::reply(
            200,
            r#"{"candidates": []}"#,
        )]);
        let llm = LlmClient::with_transport(transport);
        let err = refine_profile(profile(), Some(&job()), &llm).await.unwrap_err();
        assert!(matches!(err, AgentError::EmptyOutput));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_contract_error() {
        let transport = ScriptedTransport::new(vec![ok_text(r#"{"summarySuggestion": 3}"#)]);
        let llm = LlmClient::with_transport(transport);
        let err = refine_profile(profile(), Some(&job()), &llm).await.unwrap_err();
        assert!(matches!(
            err,
            AgentError::Contract { contract: "profile refinement", .. }
        ));
    }
}
