use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::models::job::{Job, NewJob};
use crate::models::profile::Profile;
use crate::store::{ChangeFeed, ProfileStore, StoreEvent, StoreEventKind};

/// Postgres-backed store. Profiles are one JSONB document per user;
/// jobs are rows in `saved_jobs`.
pub struct PgStore {
    pool: PgPool,
    feed: ChangeFeed,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            feed: ChangeFeed::default(),
        }
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let row: Option<Json<Profile>> =
            sqlx::query_scalar("SELECT data FROM profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to load profile")?;
        Ok(row.map(|Json(profile)| profile))
    }

    async fn put_profile(&self, user_id: Uuid, profile: &Profile) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, data, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET data = EXCLUDED.data, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user_id)
        .bind(Json(profile))
        .execute(&self.pool)
        .await
        .context("Failed to save profile")?;

        self.feed.publish(user_id, StoreEventKind::ProfileUpdated);
        Ok(())
    }

    async fn list_jobs(&self, user_id: Uuid) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, job_title, company_name, job_description, source_uri, date_saved
            FROM saved_jobs
            WHERE user_id = $1
            ORDER BY date_saved DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list saved jobs")?;
        Ok(jobs)
    }

    async fn add_job(&self, user_id: Uuid, job: NewJob) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO saved_jobs
                (id, user_id, job_title, company_name, job_description, source_uri, date_saved)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING id, job_title, company_name, job_description, source_uri, date_saved
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(&job.job_title)
        .bind(&job.company_name)
        .bind(&job.job_description)
        .bind(&job.source_uri)
        .fetch_one(&self.pool)
        .await
        .context("Failed to save job")?;

        self.feed
            .publish(user_id, StoreEventKind::JobAdded { job_id: job.id });
        Ok(job)
    }

    async fn get_job(&self, user_id: Uuid, job_id: Uuid) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, job_title, company_name, job_description, source_uri, date_saved
            FROM saved_jobs
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(job_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to load job")?;
        Ok(job)
    }

    async fn delete_job(&self, user_id: Uuid, job_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM saved_jobs WHERE id = $1 AND user_id = $2")
            .bind(job_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .context("Failed to delete job")?;

        let removed = result.rows_affected() > 0;
        if removed {
            self.feed
                .publish(user_id, StoreEventKind::JobDeleted { job_id });
        }
        Ok(removed)
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.feed.subscribe()
    }
}
