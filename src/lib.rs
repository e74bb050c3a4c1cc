// Stagegate Library - Validation-Gated Submission Workflows
// This exposes the workflow controller and its collaborator contracts

pub mod auth;
pub mod config;
pub mod domain;
pub mod forms;
pub mod services;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use auth::{Identity, Scope};
pub use config::{ObservabilityConfig, ServicesConfig, StagegateConfig, WorkflowConfig};
pub use domain::{
    MemoryStore, SourceContent, SourceFile, SourceFormat, StoreError, Submission,
    SubmissionEvent, SubmissionMetadata, SubmissionStore, WorkflowVariant,
};
pub use forms::{FieldError, StageData, ValidationOutcome};
pub use services::{
    CategorySuggestion, Classifier, Compiler, FileManager, JobStatus, Preview, ServiceError,
};
pub use telemetry::{create_workflow_span, generate_correlation_id, init_telemetry};
pub use workflow::{
    Decision, SeenSet, Stage, StageSpec, WorkflowController, WorkflowDefinition, WorkflowError,
    WorkflowProcessor,
};
