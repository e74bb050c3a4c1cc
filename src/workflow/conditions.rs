//! Per-stage completion predicates over the persisted submission state.

use crate::domain::Submission;

use super::stages::Stage;

pub fn is_contact_verified(submission: &Submission) -> bool {
    submission.submitter_contact_verified
}

pub fn is_authorship_indicated(submission: &Submission) -> bool {
    submission.submitter_is_author.is_some()
}

pub fn has_license(submission: &Submission) -> bool {
    submission.license.is_some()
}

pub fn is_policy_accepted(submission: &Submission) -> bool {
    submission.submitter_accepts_policy
}

pub fn has_primary(submission: &Submission) -> bool {
    submission.primary_classification.is_some()
}

pub fn has_secondary(submission: &Submission) -> bool {
    !submission.secondary_classification.is_empty()
}

pub fn has_valid_content(submission: &Submission) -> bool {
    submission
        .source_content
        .as_ref()
        .map(|content| content.is_valid())
        .unwrap_or(false)
}

fn has_non_processing_content(submission: &Submission) -> bool {
    submission
        .source_content
        .as_ref()
        .and_then(|content| content.source_format)
        .map(|format| !format.requires_processing())
        .unwrap_or(false)
}

/// Source that never goes through the compiler counts as processed.
pub fn is_source_processed(submission: &Submission) -> bool {
    has_valid_content(submission)
        && (submission.is_source_processed || has_non_processing_content(submission))
}

pub fn is_metadata_complete(submission: &Submission) -> bool {
    submission.metadata.title.is_some()
        && submission.metadata.abstract_text.is_some()
        && submission.metadata.authors_display.is_some()
}

pub fn is_opt_metadata_complete(submission: &Submission) -> bool {
    submission.metadata.doi.is_some()
        || submission.metadata.msc_class.is_some()
        || submission.metadata.acm_class.is_some()
        || submission.metadata.report_num.is_some()
        || submission.metadata.journal_ref.is_some()
}

pub fn is_finalized(submission: &Submission) -> bool {
    submission.is_finalized
}

pub fn is_withdrawal_requested(submission: &Submission) -> bool {
    submission.withdrawal_reason.is_some()
}

pub fn has_journal_reference(submission: &Submission) -> bool {
    submission.metadata.doi.is_some()
        || submission.metadata.journal_ref.is_some()
        || submission.metadata.report_num.is_some()
}

/// Completion predicate for a stage. The confirmation stage is never
/// "complete"; it is terminal.
pub fn is_complete(stage: Stage, submission: &Submission) -> bool {
    match stage {
        Stage::VerifyUser => is_contact_verified(submission),
        Stage::Authorship => is_authorship_indicated(submission),
        Stage::License => has_license(submission),
        Stage::Policy => is_policy_accepted(submission),
        Stage::Classification => has_primary(submission),
        Stage::CrossList => has_secondary(submission),
        Stage::FileUpload => has_valid_content(submission),
        Stage::Process => is_source_processed(submission),
        Stage::Metadata => is_metadata_complete(submission),
        Stage::OptionalMetadata => is_opt_metadata_complete(submission),
        Stage::FinalPreview => is_finalized(submission),
        Stage::Withdrawal => is_withdrawal_requested(submission),
        Stage::Jref => has_journal_reference(submission),
        Stage::Confirm => false,
    }
}
