//! Submission entity and workflow-variant resolution.
//!
//! The submission is owned by an external event-sourced domain layer; this
//! module models the read-only view the controller works from, plus the
//! events it asks the store to record.

pub mod events;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use events::SubmissionEvent;
pub use store::{MemoryStore, StoreError, SubmissionStore};

/// Format of an uploaded source package, as reported by the file manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Tex,
    Postscript,
    Pdf,
    Html,
    Invalid,
}

impl SourceFormat {
    /// Formats that go straight to preview without a compilation pass.
    pub fn requires_processing(&self) -> bool {
        matches!(self, SourceFormat::Tex | SourceFormat::Postscript)
    }
}

/// A single file in the uploaded source package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub size: u64,
    /// Per-file problems reported by the file manager (size, type, name
    /// charset violations).
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Summary of the uploaded source content for a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceContent {
    pub checksum: Option<String>,
    pub source_format: Option<SourceFormat>,
    pub uncompressed_size: u64,
    #[serde(default)]
    pub files: Vec<SourceFile>,
}

impl SourceContent {
    /// Whether the upload is usable as submission source at all.
    pub fn is_valid(&self) -> bool {
        self.checksum.is_some()
            && self.uncompressed_size > 0
            && self
                .source_format
                .map(|f| f != SourceFormat::Invalid)
                .unwrap_or(false)
    }
}

/// Core and optional metadata entered by the submitter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionMetadata {
    pub title: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub authors_display: Option<String>,
    pub comments: Option<String>,
    pub doi: Option<String>,
    pub journal_ref: Option<String>,
    pub report_num: Option<String>,
    pub acm_class: Option<String>,
    pub msc_class: Option<String>,
}

/// Read-only view of a submission as persisted by the external domain layer.
///
/// `revision` is the optimistic-concurrency token checked by
/// [`SubmissionStore::apply`]; `version` is the paper version (1 for a new
/// submission, greater for replacements).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub revision: u64,
    pub version: u32,
    pub owner_id: String,
    pub submitter_contact_verified: bool,
    pub submitter_is_author: Option<bool>,
    pub submitter_accepts_policy: bool,
    pub license: Option<String>,
    pub primary_classification: Option<String>,
    #[serde(default)]
    pub secondary_classification: Vec<String>,
    pub source_content: Option<SourceContent>,
    pub is_source_processed: bool,
    pub preview_confirmed: bool,
    #[serde(default)]
    pub metadata: SubmissionMetadata,
    pub is_finalized: bool,
    pub published: bool,
    pub has_active_requests: bool,
    pub withdrawal_reason: Option<String>,
    pub is_withdrawal: bool,
    pub is_cross_request: bool,
    pub is_jref: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Submission {
    /// A fresh, empty first-version submission owned by `owner_id`.
    pub fn new(owner_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            revision: 0,
            version: 1,
            owner_id: owner_id.into(),
            submitter_contact_verified: false,
            submitter_is_author: None,
            submitter_accepts_policy: false,
            license: None,
            primary_classification: None,
            secondary_classification: Vec::new(),
            source_content: None,
            is_source_processed: false,
            preview_confirmed: false,
            metadata: SubmissionMetadata::default(),
            is_finalized: false,
            published: false,
            has_active_requests: false,
            withdrawal_reason: None,
            is_withdrawal: false,
            is_cross_request: false,
            is_jref: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The applicable stage sequence for a submission.
///
/// Request-type flags (withdrawal, cross-list, journal reference) only make
/// sense against a published submission; a submission carrying more than one
/// of them, or none of the recognizable shapes, has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkflowVariant {
    New,
    Replacement,
    Withdrawal,
    Jref,
    CrossList,
}

impl WorkflowVariant {
    pub fn resolve(submission: &Submission) -> Option<WorkflowVariant> {
        let request_flags = [
            submission.is_withdrawal,
            submission.is_cross_request,
            submission.is_jref,
        ]
        .iter()
        .filter(|f| **f)
        .count();
        if request_flags > 1 {
            return None;
        }
        if request_flags == 1 {
            if !submission.published {
                return None;
            }
            if submission.is_withdrawal {
                return Some(WorkflowVariant::Withdrawal);
            }
            if submission.is_cross_request {
                return Some(WorkflowVariant::CrossList);
            }
            return Some(WorkflowVariant::Jref);
        }
        match submission.version {
            0 => None,
            1 => Some(WorkflowVariant::New),
            _ => Some(WorkflowVariant::Replacement),
        }
    }
}
