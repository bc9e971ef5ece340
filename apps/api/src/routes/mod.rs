pub mod events;
pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::agents::handlers as agents;
use crate::jobs::handlers as jobs;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route(
            "/api/v1/users/:user_id/profile",
            get(profile::handle_get_profile).put(profile::handle_put_profile),
        )
        .route("/api/v1/profile/edit", post(profile::handle_edit_profile))
        // Saved jobs API
        .route(
            "/api/v1/users/:user_id/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_add_job),
        )
        .route(
            "/api/v1/users/:user_id/jobs/:job_id",
            delete(jobs::handle_delete_job),
        )
        // Live updates
        .route("/api/v1/users/:user_id/events", get(events::handle_events))
        // Agent API
        .route("/api/v1/agents/search", post(agents::handle_search))
        .route("/api/v1/agents/refine", post(agents::handle_refine))
        .route("/api/v1/agents/parse-resume", post(agents::handle_parse_resume))
        .route(
            "/api/v1/agents/parse-resume/pdf",
            post(agents::handle_parse_resume_pdf),
        )
        .route("/api/v1/agents/generate", post(agents::handle_generate))
        .with_state(state)
}
