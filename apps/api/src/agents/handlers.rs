//! Axum route handlers for the agent operations.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::agents::documents::{generate_document, DocumentType};
use crate::agents::refine::{refine_profile, ProfileRefinement};
use crate::agents::resume_parse::parse_resume;
use crate::agents::search::{search_jobs, JobSearchResult};
use crate::errors::AppError;
use crate::models::job::Job;
use crate::models::profile::Profile;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// `profile` overrides the stored profile, e.g. unsaved editor state.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineRequest {
    pub user_id: Uuid,
    pub job_id: Option<Uuid>,
    pub profile: Option<Profile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResumeRequest {
    pub user_id: Uuid,
    pub resume_text: String,
    pub profile: Option<Profile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub user_id: Uuid,
    pub job_id: Option<Uuid>,
    pub document_type: DocumentType,
    pub profile: Option<Profile>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub document_type: DocumentType,
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/agents/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<Vec<JobSearchResult>>, AppError> {
    Ok(Json(search_jobs(&request.query, &state.llm).await?))
}

/// POST /api/v1/agents/refine
pub async fn handle_refine(
    State(state): State<AppState>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<ProfileRefinement>, AppError> {
    let job = load_job(&state, request.user_id, request.job_id).await?;
    let profile = match request.profile {
        Some(profile) => profile,
        None => stored_profile(&state, request.user_id).await?.unwrap_or_default(),
    };

    let refinement = refine_profile(profile, job.as_ref(), &state.llm).await?;
    Ok(Json(refinement))
}

/// POST /api/v1/agents/parse-resume
///
/// Returns the reconciled profile for review. The client saves it explicitly.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<Profile>, AppError> {
    let current = current_profile(&state, request.user_id, request.profile).await?;
    Ok(Json(parse_resume(&request.resume_text, current, &state.llm).await?))
}

/// POST /api/v1/agents/parse-resume/pdf?userId=
///
/// Multipart upload with a `file` field holding a PDF resume.
pub async fn handle_parse_resume_pdf(
    State(state): State<AppState>,
    Query(query): Query<PdfQuery>,
    mut multipart: Multipart,
) -> Result<Json<Profile>, AppError> {
    let mut file: Option<Bytes> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            file = Some(field.bytes().await?);
        }
    }
    let file = file.ok_or_else(|| AppError::Validation("Missing 'file' upload".to_string()))?;

    info!("Extracting text from uploaded PDF ({} bytes)", file.len());
    let resume_text = extract_pdf_text(file).await?;

    let current = current_profile(&state, query.user_id, None).await?;
    Ok(Json(parse_resume(&resume_text, current, &state.llm).await?))
}

/// POST /api/v1/agents/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let job = load_job(&state, request.user_id, request.job_id).await?;
    let profile = match request.profile {
        Some(profile) => Some(profile),
        None => stored_profile(&state, request.user_id).await?,
    };

    let text = generate_document(request.document_type, profile, job.as_ref(), &state.llm).await?;
    Ok(Json(GenerateResponse {
        document_type: request.document_type,
        text,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// A missing or unknown job id yields `None`; the agent reports it as a
/// precondition failure.
async fn load_job(
    state: &AppState,
    user_id: Uuid,
    job_id: Option<Uuid>,
) -> Result<Option<Job>, AppError> {
    match job_id {
        Some(job_id) => Ok(state.store.get_job(user_id, job_id).await?),
        None => Ok(None),
    }
}

async fn stored_profile(state: &AppState, user_id: Uuid) -> Result<Option<Profile>, AppError> {
    Ok(state.store.get_profile(user_id).await?)
}

async fn current_profile(
    state: &AppState,
    user_id: Uuid,
    submitted: Option<Profile>,
) -> Result<Profile, AppError> {
    match submitted {
        Some(profile) => Ok(profile),
        None => Ok(stored_profile(state, user_id)
            .await?
            .unwrap_or_else(Profile::blank)),
    }
}

async fn extract_pdf_text(file: Bytes) -> Result<String, AppError> {
    let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&file))
        .await
        .map_err(|e| {
            if e.is_panic() {
                warn!("PDF text extraction panicked: {e}");
                unreadable_pdf()
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?;

    extracted.map_err(|e| {
        warn!("PDF text extraction failed: {e}");
        unreadable_pdf()
    })
}

fn unreadable_pdf() -> AppError {
    AppError::Validation("Could not read text from the uploaded PDF".to_string())
}
