//! Shared fixtures: stub collaborators and submission builders.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use stagegate::{
    CategorySuggestion, Classifier, Compiler, FileManager, Identity, JobStatus, MemoryStore,
    Preview, Scope, ServiceError, SourceContent, SourceFile, SourceFormat, Submission,
    WorkflowConfig, WorkflowController,
};

pub struct StaticFileManager {
    pub content: SourceContent,
}

#[async_trait]
impl FileManager for StaticFileManager {
    async fn source_summary(&self, _submission_id: Uuid) -> Result<SourceContent, ServiceError> {
        Ok(self.content.clone())
    }
}

pub struct StaticCompiler {
    pub status: JobStatus,
}

#[async_trait]
impl Compiler for StaticCompiler {
    async fn job_status(&self, _checksum: &str) -> Result<JobStatus, ServiceError> {
        Ok(self.status)
    }
}

pub struct StaticClassifier {
    pub suggestions: Vec<CategorySuggestion>,
}

#[async_trait]
impl Classifier for StaticClassifier {
    async fn suggestions(
        &self,
        _submission: &Submission,
    ) -> Result<Vec<CategorySuggestion>, ServiceError> {
        Ok(self.suggestions.clone())
    }
}

pub struct StaticPreview {
    pub available: bool,
}

#[async_trait]
impl Preview for StaticPreview {
    async fn is_available(&self, _checksum: &str) -> Result<bool, ServiceError> {
        Ok(self.available)
    }
}

pub fn tex_content() -> SourceContent {
    SourceContent {
        checksum: Some("cafef00d".to_string()),
        source_format: Some(SourceFormat::Tex),
        uncompressed_size: 8192,
        files: vec![SourceFile {
            name: "main.tex".to_string(),
            size: 8192,
            errors: vec![],
        }],
    }
}

pub fn pdf_content() -> SourceContent {
    SourceContent {
        checksum: Some("feedbeef".to_string()),
        source_format: Some(SourceFormat::Pdf),
        uncompressed_size: 4096,
        files: vec![SourceFile {
            name: "paper.pdf".to_string(),
            size: 4096,
            errors: vec![],
        }],
    }
}

/// Controller over a fresh in-memory store with friendly collaborators.
pub fn controller(store: Arc<MemoryStore>) -> WorkflowController {
    controller_with(store, JobStatus::Succeeded, true)
}

pub fn controller_with(
    store: Arc<MemoryStore>,
    compiler_status: JobStatus,
    preview_available: bool,
) -> WorkflowController {
    WorkflowController::new(
        store,
        Arc::new(StaticFileManager {
            content: tex_content(),
        }),
        Arc::new(StaticCompiler {
            status: compiler_status,
        }),
        Arc::new(StaticClassifier {
            suggestions: vec![],
        }),
        Arc::new(StaticPreview {
            available: preview_available,
        }),
        WorkflowConfig::default(),
    )
}

pub fn owner_identity() -> Identity {
    Identity::new("submitter-1", [Scope::SubmissionRead, Scope::SubmissionWrite])
}

pub fn owned_submission() -> Submission {
    Submission::new("submitter-1")
}

pub fn accepted_license() -> String {
    WorkflowConfig::default().accepted_licenses[0].clone()
}
