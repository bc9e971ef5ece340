use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::models::job::{Job, NewJob};
use crate::models::profile::Profile;
use crate::store::{ChangeFeed, ProfileStore, StoreEvent, StoreEventKind};

/// In-process store with the same contract as `PgStore`.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<Uuid, Profile>>,
    jobs: RwLock<HashMap<Uuid, Vec<Job>>>,
    feed: ChangeFeed,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<Profile>> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn put_profile(&self, user_id: Uuid, profile: &Profile) -> Result<()> {
        self.profiles.write().await.insert(user_id, profile.clone());
        self.feed.publish(user_id, StoreEventKind::ProfileUpdated);
        Ok(())
    }

    async fn list_jobs(&self, user_id: Uuid) -> Result<Vec<Job>> {
        let mut jobs = self
            .jobs
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default();
        jobs.sort_by(|a, b| b.date_saved.cmp(&a.date_saved));
        Ok(jobs)
    }

    async fn add_job(&self, user_id: Uuid, job: NewJob) -> Result<Job> {
        let job = Job {
            id: Uuid::new_v4(),
            job_title: job.job_title,
            company_name: job.company_name,
            job_description: job.job_description,
            source_uri: job.source_uri,
            date_saved: Utc::now(),
        };
        self.jobs
            .write()
            .await
            .entry(user_id)
            .or_default()
            .push(job.clone());
        self.feed
            .publish(user_id, StoreEventKind::JobAdded { job_id: job.id });
        Ok(job)
    }

    async fn get_job(&self, user_id: Uuid, job_id: Uuid) -> Result<Option<Job>> {
        Ok(self
            .jobs
            .read()
            .await
            .get(&user_id)
            .and_then(|jobs| jobs.iter().find(|j| j.id == job_id).cloned()))
    }

    async fn delete_job(&self, user_id: Uuid, job_id: Uuid) -> Result<bool> {
        let removed = match self.jobs.write().await.get_mut(&user_id) {
            Some(jobs) => {
                let before = jobs.len();
                jobs.retain(|j| j.id != job_id);
                jobs.len() < before
            }
            None => false,
        };
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

#[cfg(test)]
mod tests {
    use super::*;

    fn new_job(title: &str) -> NewJob {
        NewJob {
            job_title: title.to_string(),
            company_name: "Acme".to_string(),
            job_description: "Build things".to_string(),
            source_uri: None,
        }
    }

    #[tokio::test]
    async fn test_profiles_are_scoped_by_user() {
        let store = MemoryStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let profile = Profile {
            name: "Alice".to_string(),
            ..Profile::default()
        };
        store.put_profile(alice, &profile).await.unwrap();

        assert_eq!(store.get_profile(alice).await.unwrap(), Some(profile));
        assert_eq!(store.get_profile(bob).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_add_list_delete_job() {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let first = store.add_job(user, new_job("First")).await.unwrap();
        let second = store.add_job(user, new_job("Second")).await.unwrap();
        assert_ne!(first.id, second.id);

        let jobs = store.list_jobs(user).await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert!(jobs[0].date_saved >= jobs[1].date_saved);

        assert!(store.delete_job(user, first.id).await.unwrap());
        assert!(!store.delete_job(user, first.id).await.unwrap());
        assert_eq!(store.get_job(user, first.id).await.unwrap(), None);
        assert_eq!(store.get_job(user, second.id).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_mutations_are_published() {
        let store = MemoryStore::new();
        let mut rx = store.subscribe();
        let user = Uuid::new_v4();

        store.put_profile(user, &Profile::default()).await.unwrap();
        let job = store.add_job(user, new_job("SRE")).await.unwrap();
        store.delete_job(user, job.id).await.unwrap();

        assert_eq!(rx.recv().await.unwrap().kind, StoreEventKind::ProfileUpdated);
        assert_eq!(
            rx.recv().await.unwrap().kind,
            StoreEventKind::JobAdded { job_id: job.id }
        );
        assert_eq!(
            rx.recv().await.unwrap().kind,
            StoreEventKind::JobDeleted { job_id: job.id }
        );
    }
}
