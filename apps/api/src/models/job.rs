use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A saved job posting. Immutable once saved; only deletion is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    /// Set for search-derived jobs, absent for manual entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_uri: Option<String>,
    pub date_saved: DateTime<Utc>,
}

/// A job as submitted for saving, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    #[serde(default)]
    pub source_uri: Option<String>,
}
