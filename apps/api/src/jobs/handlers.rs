//! Axum route handlers for the saved-jobs API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::validate_new_job;
use crate::models::job::{Job, NewJob};
use crate::state::AppState;

/// GET /api/v1/users/:user_id/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(state.store.list_jobs(user_id).await?))
}

/// POST /api/v1/users/:user_id/jobs
///
/// Saves a manual or search-derived job. The store assigns id and `dateSaved`.
pub async fn handle_add_job(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(job): Json<NewJob>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    validate_new_job(&job).map_err(|msg| AppError::Validation(msg.to_string()))?;

    let job = state.store.add_job(user_id, job).await?;
    info!("Saved job {} for user {user_id}", job.id);
    Ok((StatusCode::CREATED, Json(job)))
}

/// DELETE /api/v1/users/:user_id/jobs/:job_id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path((user_id, job_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete_job(user_id, job_id).await? {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }
    info!("Deleted job {job_id} for user {user_id}");
    Ok(StatusCode::NO_CONTENT)
}
