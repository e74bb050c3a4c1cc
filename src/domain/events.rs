//! Events the controller asks the domain layer to record.
//!
//! The system of record is external; these are the wire-level requests it
//! accepts. Each event also knows how to project itself onto a submission,
//! which is what the in-memory store and the tests use.

use serde::{Deserialize, Serialize};

use super::{SourceContent, Submission};

/// A stage-completion side effect requested by the workflow controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SubmissionEvent {
    ConfirmContactInformation,
    ConfirmAuthorship {
        submitter_is_author: bool,
    },
    SelectLicense {
        license_uri: String,
    },
    AcceptPolicy,
    SetPrimaryClassification {
        category: String,
    },
    SetSecondaryClassifications {
        categories: Vec<String>,
    },
    SetUploadedContent {
        content: SourceContent,
    },
    ConfirmSourceProcessed,
    ConfirmPreview,
    SetCoreMetadata {
        title: String,
        abstract_text: String,
        authors_display: String,
        comments: Option<String>,
    },
    SetOptionalMetadata {
        doi: Option<String>,
        journal_ref: Option<String>,
        report_num: Option<String>,
        acm_class: Option<String>,
        msc_class: Option<String>,
    },
    RequestWithdrawal {
        reason: String,
    },
    SetJournalReference {
        doi: Option<String>,
        journal_ref: Option<String>,
        report_num: Option<String>,
    },
    Finalize,
}

impl SubmissionEvent {
    /// Apply this event to a submission.
    ///
    /// Changing the primary classification drops a secondary that now
    /// duplicates it, and replacing the source content invalidates the
    /// processing and preview results derived from the old source.
    pub fn project(&self, submission: &mut Submission) {
        match self {
            SubmissionEvent::ConfirmContactInformation => {
                submission.submitter_contact_verified = true;
            }
            SubmissionEvent::ConfirmAuthorship {
                submitter_is_author,
            } => {
                submission.submitter_is_author = Some(*submitter_is_author);
            }
            SubmissionEvent::SelectLicense { license_uri } => {
                submission.license = Some(license_uri.clone());
            }
            SubmissionEvent::AcceptPolicy => {
                submission.submitter_accepts_policy = true;
            }
            SubmissionEvent::SetPrimaryClassification { category } => {
                submission.primary_classification = Some(category.clone());
                submission
                    .secondary_classification
                    .retain(|secondary| secondary != category);
            }
            SubmissionEvent::SetSecondaryClassifications { categories } => {
                submission.secondary_classification = categories.clone();
            }
            SubmissionEvent::SetUploadedContent { content } => {
                submission.source_content = Some(content.clone());
                submission.is_source_processed = false;
                submission.preview_confirmed = false;
            }
            SubmissionEvent::ConfirmSourceProcessed => {
                submission.is_source_processed = true;
            }
            SubmissionEvent::ConfirmPreview => {
                submission.preview_confirmed = true;
            }
            SubmissionEvent::SetCoreMetadata {
                title,
                abstract_text,
                authors_display,
                comments,
            } => {
                submission.metadata.title = Some(title.clone());
                submission.metadata.abstract_text = Some(abstract_text.clone());
                submission.metadata.authors_display = Some(authors_display.clone());
                submission.metadata.comments = comments.clone();
            }
            SubmissionEvent::SetOptionalMetadata {
                doi,
                journal_ref,
                report_num,
                acm_class,
                msc_class,
            } => {
                submission.metadata.doi = doi.clone();
                submission.metadata.journal_ref = journal_ref.clone();
                submission.metadata.report_num = report_num.clone();
                submission.metadata.acm_class = acm_class.clone();
                submission.metadata.msc_class = msc_class.clone();
            }
            SubmissionEvent::RequestWithdrawal { reason } => {
                submission.withdrawal_reason = Some(reason.clone());
            }
            SubmissionEvent::SetJournalReference {
                doi,
                journal_ref,
                report_num,
            } => {
                submission.metadata.doi = doi.clone();
                submission.metadata.journal_ref = journal_ref.clone();
                submission.metadata.report_num = report_num.clone();
            }
            SubmissionEvent::Finalize => {
                submission.is_finalized = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceFormat;

    #[test]
    fn primary_classification_prunes_duplicate_secondary() {
        let mut submission = Submission::new("user-1");
        submission.secondary_classification =
            vec!["cs.LG".to_string(), "math.ST".to_string()];

        SubmissionEvent::SetPrimaryClassification {
            category: "cs.LG".to_string(),
        }
        .project(&mut submission);

        assert_eq!(submission.primary_classification.as_deref(), Some("cs.LG"));
        assert_eq!(submission.secondary_classification, vec!["math.ST"]);
    }

    #[test]
    fn replacing_source_invalidates_processing_and_preview() {
        let mut submission = Submission::new("user-1");
        submission.is_source_processed = true;
        submission.preview_confirmed = true;

        SubmissionEvent::SetUploadedContent {
            content: SourceContent {
                checksum: Some("deadbeef".to_string()),
                source_format: Some(SourceFormat::Tex),
                uncompressed_size: 2048,
                files: vec![],
            },
        }
        .project(&mut submission);

        assert!(!submission.is_source_processed);
        assert!(!submission.preview_confirmed);
        assert!(submission.source_content.is_some());
    }

    #[test]
    fn finalize_marks_submission_finalized() {
        let mut submission = Submission::new("user-1");
        SubmissionEvent::Finalize.project(&mut submission);
        assert!(submission.is_finalized);
    }
}
