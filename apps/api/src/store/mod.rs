//! Persistence collaborator for profiles and saved jobs.
//!
//! Carried in `AppState` as `Arc<dyn ProfileStore>`. Every mutation is
//! published on the store's change feed so open views can refresh live.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::models::job::{Job, NewJob};
use crate::models::profile::Profile;

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[cfg(test)]
pub use memory::MemoryStore;
pub use postgres::PgStore;

const CHANGE_FEED_CAPACITY: usize = 256;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>>;

    /// Replaces the stored profile. Last write wins.
    async fn put_profile(&self, user_id: Uuid, profile: &Profile) -> Result<()>;

    /// Saved jobs, newest first.
    async fn list_jobs(&self, user_id: Uuid) -> Result<Vec<Job>>;

    /// Stores a job, assigning its id and `date_saved`.
    async fn add_job(&self, user_id: Uuid, job: NewJob) -> Result<Job>;

    async fn get_job(&self, user_id: Uuid, job_id: Uuid) -> Result<Option<Job>>;

    /// Returns `false` when the job does not exist.
    async fn delete_job(&self, user_id: Uuid, job_id: Uuid) -> Result<bool>;

    /// Receiver for changes of every user; callers filter by `user_id`.
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreEvent {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub kind: StoreEventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreEventKind {
    ProfileUpdated,
    JobAdded {
        #[serde(rename = "jobId")]
        job_id: Uuid,
    },
    JobDeleted {
        #[serde(rename = "jobId")]
        job_id: Uuid,
    },
}

impl StoreEventKind {
    pub fn name(&self) -> &'static str {
        match self {
            StoreEventKind::ProfileUpdated => "profile_updated",
            StoreEventKind::JobAdded { .. } => "job_added",
            StoreEventKind::JobDeleted { .. } => "job_deleted",
        }
    }
}

/// Fan-out of store mutations to any number of subscribers.
pub struct ChangeFeed {
    tx: broadcast::Sender<StoreEvent>,
}

impl Default for ChangeFeed {
    fn default() -> Self {
        let (tx, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self { tx }
    }
}

impl ChangeFeed {
    pub fn publish(&self, user_id: Uuid, kind: StoreEventKind) {
        // No subscribers is not an error.
        let _ = self.tx.send(StoreEvent { user_id, kind });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }
}
