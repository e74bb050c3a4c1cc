//! Contract with the external domain/event layer.
//!
//! The controller only ever talks to the system of record through
//! [`SubmissionStore`]: load a fresh view, or apply events against an
//! expected revision. Optimistic concurrency lives here; a conflicting
//! write surfaces as [`StoreError::VersionConflict`] and the caller
//! re-derives from fresh state.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Submission, SubmissionEvent};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("submission {0} not found")]
    NotFound(Uuid),
    #[error("version conflict on submission {id}: expected revision {expected}, found {found}")]
    VersionConflict { id: Uuid, expected: u64, found: u64 },
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Load/apply operations against the external system of record.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Fetch the current persisted view of a submission.
    async fn load(&self, id: Uuid) -> Result<Submission, StoreError>;

    /// Record events against a submission, provided nobody else has written
    /// since the caller loaded `expected_revision`.
    async fn apply(
        &self,
        id: Uuid,
        expected_revision: u64,
        events: Vec<SubmissionEvent>,
    ) -> Result<Submission, StoreError>;
}

/// In-process store used by tests and demos.
///
/// One `apply` call bumps the revision once regardless of how many events it
/// carries, matching the one-write-per-request model.
#[derive(Debug, Default)]
pub struct MemoryStore {
    submissions: RwLock<HashMap<Uuid, Submission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, submission: Submission) {
        self.submissions
            .write()
            .await
            .insert(submission.id, submission);
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn load(&self, id: Uuid) -> Result<Submission, StoreError> {
        self.submissions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn apply(
        &self,
        id: Uuid,
        expected_revision: u64,
        events: Vec<SubmissionEvent>,
    ) -> Result<Submission, StoreError> {
        let mut submissions = self.submissions.write().await;
        let submission = submissions.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if submission.revision != expected_revision {
            return Err(StoreError::VersionConflict {
                id,
                expected: expected_revision,
                found: submission.revision,
            });
        }
        for event in &events {
            event.project(submission);
        }
        submission.revision += 1;
        submission.updated_at = chrono::Utc::now();
        Ok(submission.clone())
    }
}
