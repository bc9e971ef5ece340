//! Axum route handlers for the Profile API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::profile::editing::{apply_edit, ProfileEdit};
use crate::profile::sanitize::sanitize;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub profile: Profile,
    pub edit: ProfileEdit,
}

/// GET /api/v1/users/:user_id/profile
///
/// A user with no stored profile gets the blank editor profile.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Profile>, AppError> {
    let profile = state
        .store
        .get_profile(user_id)
        .await?
        .unwrap_or_else(Profile::blank);
    Ok(Json(profile))
}

/// PUT /api/v1/users/:user_id/profile
///
/// Sanitizes and persists the profile, returning what was stored.
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(profile): Json<Profile>,
) -> Result<Json<Profile>, AppError> {
    let profile = sanitize(profile);
    state.store.put_profile(user_id, &profile).await?;
    info!("Saved profile for user {user_id}");
    Ok(Json(profile))
}

/// POST /api/v1/profile/edit
///
/// Applies one edit to the submitted profile. Nothing is persisted.
pub async fn handle_edit_profile(
    Json(request): Json<EditRequest>,
) -> Result<Json<Profile>, AppError> {
    Ok(Json(apply_edit(request.profile, request.edit)?))
}
