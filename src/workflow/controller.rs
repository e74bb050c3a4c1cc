//! The workflow controller: decides the current stage, authorizes stage
//! access, and advances a submission when its stage input validates.
//!
//! Every decision is computed synchronously from freshly loaded state.
//! Nothing here retries on a timer; a conflicting write is resolved by
//! re-deriving the workflow view from the store.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::auth::Identity;
use crate::config::WorkflowConfig;
use crate::domain::{StoreError, Submission, SubmissionEvent, SubmissionStore, WorkflowVariant};
use crate::forms::{StageData, UploadForm, ValidationOutcome};
use crate::services::{
    CategorySuggestion, Classifier, Compiler, FileManager, JobStatus, Preview,
};

use super::conditions;
use super::definition::WorkflowDefinition;
use super::processor::{SeenSet, WorkflowProcessor};
use super::stages::Stage;
use super::WorkflowError;

/// Outcome of asking whether a stage may be rendered or processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(Stage),
}

pub struct WorkflowController {
    store: Arc<dyn SubmissionStore>,
    files: Arc<dyn FileManager>,
    compiler: Arc<dyn Compiler>,
    classifier: Arc<dyn Classifier>,
    preview: Arc<dyn Preview>,
    workflow_config: WorkflowConfig,
}

impl WorkflowController {
    pub fn new(
        store: Arc<dyn SubmissionStore>,
        files: Arc<dyn FileManager>,
        compiler: Arc<dyn Compiler>,
        classifier: Arc<dyn Classifier>,
        preview: Arc<dyn Preview>,
        workflow_config: WorkflowConfig,
    ) -> Self {
        Self {
            store,
            files,
            compiler,
            classifier,
            preview,
            workflow_config,
        }
    }

    fn definition_for(
        &self,
        submission: &Submission,
    ) -> Result<&'static WorkflowDefinition, WorkflowError> {
        WorkflowVariant::resolve(submission)
            .map(WorkflowDefinition::for_variant)
            .ok_or(WorkflowError::UnknownWorkflowVariant {
                submission_id: submission.id,
            })
    }

    /// First stage whose completion predicate is false; the confirmation
    /// stage when every stage is done.
    pub fn resolve_current_stage(
        &self,
        submission: &Submission,
        seen: &SeenSet,
    ) -> Result<Stage, WorkflowError> {
        let definition = self.definition_for(submission)?;
        Ok(WorkflowProcessor::new(definition, submission, seen).current_stage())
    }

    /// Allow when every stage before `requested` is done (which makes every
    /// already-completed stage revisitable); otherwise redirect to the
    /// current stage. A stage the variant does not include also redirects.
    pub fn authorize_stage_access(
        &self,
        submission: &Submission,
        seen: &SeenSet,
        requested: Stage,
    ) -> Result<Decision, WorkflowError> {
        let definition = self.definition_for(submission)?;
        let processor = WorkflowProcessor::new(definition, submission, seen);
        if !definition.contains(requested) {
            debug!(
                submission_id = %submission.id,
                requested = %requested,
                workflow = definition.name,
                "stage not part of this workflow variant"
            );
            return Ok(Decision::Redirect(processor.current_stage()));
        }
        if processor.can_proceed_to(requested) {
            Ok(Decision::Allow)
        } else {
            let current = processor.current_stage();
            debug!(
                submission_id = %submission.id,
                requested = %requested,
                current = %current,
                "redirecting past-gate stage request"
            );
            Ok(Decision::Redirect(current))
        }
    }

    /// Authorize a render of `stage` and, when allowed, record the visit.
    /// Must-see stages become "done" only through this call.
    pub fn record_visit(
        &self,
        submission: &Submission,
        seen: &mut SeenSet,
        stage: Stage,
    ) -> Result<Decision, WorkflowError> {
        let decision = self.authorize_stage_access(submission, seen, stage)?;
        if decision == Decision::Allow {
            let definition = self.definition_for(submission)?;
            seen.mark_seen(definition.name, stage);
        }
        Ok(decision)
    }

    /// Validate `data` against its stage, record the resulting events, and
    /// return the stage the user should land on next.
    ///
    /// No forward progress without passing validation, and no silent skip:
    /// invalid input returns `ValidationFailed` with the field errors and
    /// leaves the submission untouched. A version conflict on the write is
    /// absorbed by re-loading and returning the fresh current stage.
    pub async fn advance(
        &self,
        submission_id: Uuid,
        identity: &Identity,
        seen: &mut SeenSet,
        data: StageData,
    ) -> Result<Stage, WorkflowError> {
        let submission = self.store.load(submission_id).await?;
        if !identity.can_write(&submission) {
            return Err(WorkflowError::AccessDenied {
                user_id: identity.user_id.clone(),
                submission_id,
            });
        }
        let definition = self.definition_for(&submission)?;
        let stage = data.stage();
        let processor = WorkflowProcessor::new(definition, &submission, seen);
        if !definition.contains(stage) || !processor.can_proceed_to(stage) {
            let redirect_to = processor.current_stage();
            return Err(WorkflowError::StageUnreachable {
                requested: stage,
                redirect_to,
            });
        }

        let events = match data.validate(&submission, &self.workflow_config) {
            ValidationOutcome::Valid(events) => events,
            ValidationOutcome::Invalid(errors) => {
                info!(
                    submission_id = %submission_id,
                    stage = %stage,
                    error_count = errors.len(),
                    "stage input failed validation"
                );
                return Err(WorkflowError::ValidationFailed { errors });
            }
        };

        match self
            .store
            .apply(submission_id, submission.revision, events)
            .await
        {
            Ok(updated) => {
                seen.mark_seen(definition.name, stage);
                let processor = WorkflowProcessor::new(definition, &updated, seen);
                let next = processor.current_stage();
                info!(
                    submission_id = %submission_id,
                    completed = %stage,
                    next = %next,
                    "stage advanced"
                );
                Ok(next)
            }
            Err(StoreError::VersionConflict { .. }) => {
                warn!(
                    submission_id = %submission_id,
                    stage = %stage,
                    "version conflict on advance; re-deriving from fresh state"
                );
                let fresh = self.store.load(submission_id).await?;
                self.resolve_current_stage(&fresh, seen)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Ask the compiler whether the pending processing job finished, and
    /// record completion when it did. Returns whether the source counts as
    /// processed afterwards.
    pub async fn sync_source_processing(
        &self,
        submission_id: Uuid,
    ) -> Result<bool, WorkflowError> {
        let submission = self.store.load(submission_id).await?;
        if conditions::is_source_processed(&submission) {
            return Ok(true);
        }
        let Some(checksum) = submission
            .source_content
            .as_ref()
            .and_then(|content| content.checksum.clone())
        else {
            return Ok(false);
        };
        match self.compiler.job_status(&checksum).await? {
            JobStatus::Succeeded => {
                match self
                    .store
                    .apply(
                        submission_id,
                        submission.revision,
                        vec![SubmissionEvent::ConfirmSourceProcessed],
                    )
                    .await
                {
                    Ok(_) => Ok(true),
                    Err(StoreError::VersionConflict { .. }) => {
                        let fresh = self.store.load(submission_id).await?;
                        Ok(conditions::is_source_processed(&fresh))
                    }
                    Err(err) => Err(err.into()),
                }
            }
            status => {
                debug!(submission_id = %submission_id, ?status, "processing not finished");
                Ok(false)
            }
        }
    }

    /// Ask the preview service whether a rendered preview exists, and
    /// record availability when it does. The final stage only validates
    /// once the preview is confirmed.
    pub async fn confirm_preview(&self, submission_id: Uuid) -> Result<bool, WorkflowError> {
        let submission = self.store.load(submission_id).await?;
        if submission.preview_confirmed {
            return Ok(true);
        }
        let Some(checksum) = submission
            .source_content
            .as_ref()
            .and_then(|content| content.checksum.clone())
        else {
            return Ok(false);
        };
        if !self.preview.is_available(&checksum).await? {
            return Ok(false);
        }
        match self
            .store
            .apply(
                submission_id,
                submission.revision,
                vec![SubmissionEvent::ConfirmPreview],
            )
            .await
        {
            Ok(_) => Ok(true),
            Err(StoreError::VersionConflict { .. }) => {
                let fresh = self.store.load(submission_id).await?;
                Ok(fresh.preview_confirmed)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Build the upload stage's form from the file manager's current view
    /// of the submission source.
    pub async fn upload_form(&self, submission_id: Uuid) -> Result<UploadForm, WorkflowError> {
        let summary = self.files.source_summary(submission_id).await?;
        Ok(UploadForm::from_summary(summary))
    }

    /// Advisory category suggestions for the classification stage.
    pub async fn classification_suggestions(
        &self,
        submission_id: Uuid,
    ) -> Result<Vec<CategorySuggestion>, WorkflowError> {
        let submission = self.store.load(submission_id).await?;
        Ok(self.classifier.suggestions(&submission).await?)
    }
}
