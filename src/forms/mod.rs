//! Typed per-stage form validation.
//!
//! Each stage has a typed form whose `validate` either yields the domain
//! events to record (`Valid`) or the field-level problems to redisplay
//! (`Invalid`). The controller never records events from a form that did
//! not validate.

pub mod authorship;
pub mod classification;
pub mod cross;
pub mod final_preview;
pub mod jref;
pub mod license;
pub mod metadata;
pub mod policy;
pub mod process;
pub mod upload;
pub mod verify_user;
pub mod withdraw;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::WorkflowConfig;
use crate::domain::{Submission, SubmissionEvent};
use crate::workflow::Stage;

pub use authorship::AuthorshipForm;
pub use classification::ClassificationForm;
pub use cross::CrossListForm;
pub use final_preview::FinalPreviewForm;
pub use jref::JrefForm;
pub use license::LicenseForm;
pub use metadata::{MetadataForm, OptionalMetadataForm};
pub use policy::PolicyForm;
pub use process::ProcessForm;
pub use upload::UploadForm;
pub use verify_user::VerifyUserForm;
pub use withdraw::WithdrawalForm;

/// A single field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of validating a stage form.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// The events the domain layer should record for this stage.
    Valid(Vec<SubmissionEvent>),
    /// Field errors; the caller redisplays the same stage.
    Invalid(Vec<FieldError>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }
}

static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z\-]*(\.[A-Za-z\-]+)?$").expect("category regex"));

static DOI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^10\.\d{4,9}/\S+$").expect("doi regex"));

/// Category identifiers look like `archive` or `archive.Subject`.
pub(crate) fn is_valid_category(category: &str) -> bool {
    CATEGORY_RE.is_match(category)
}

pub(crate) fn is_valid_doi(doi: &str) -> bool {
    DOI_RE.is_match(doi)
}

pub(crate) fn check_length(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.trim().chars().count();
    if len < min {
        errors.push(FieldError::new(
            field,
            format!("Field must be at least {min} characters long."),
        ));
    } else if len > max {
        errors.push(FieldError::new(
            field,
            format!("Field cannot be longer than {max} characters."),
        ));
    }
}

/// The validated input for one stage, as a tagged union of typed forms.
#[derive(Debug, Clone, PartialEq)]
pub enum StageData {
    VerifyUser(VerifyUserForm),
    Authorship(AuthorshipForm),
    License(LicenseForm),
    Policy(PolicyForm),
    Classification(ClassificationForm),
    CrossList(CrossListForm),
    Upload(UploadForm),
    Process(ProcessForm),
    Metadata(MetadataForm),
    OptionalMetadata(OptionalMetadataForm),
    FinalPreview(FinalPreviewForm),
    Withdrawal(WithdrawalForm),
    Jref(JrefForm),
}

impl StageData {
    /// The stage this data belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            StageData::VerifyUser(_) => Stage::VerifyUser,
            StageData::Authorship(_) => Stage::Authorship,
            StageData::License(_) => Stage::License,
            StageData::Policy(_) => Stage::Policy,
            StageData::Classification(_) => Stage::Classification,
            StageData::CrossList(_) => Stage::CrossList,
            StageData::Upload(_) => Stage::FileUpload,
            StageData::Process(_) => Stage::Process,
            StageData::Metadata(_) => Stage::Metadata,
            StageData::OptionalMetadata(_) => Stage::OptionalMetadata,
            StageData::FinalPreview(_) => Stage::FinalPreview,
            StageData::Withdrawal(_) => Stage::Withdrawal,
            StageData::Jref(_) => Stage::Jref,
        }
    }

    pub fn validate(
        &self,
        submission: &Submission,
        workflow_config: &WorkflowConfig,
    ) -> ValidationOutcome {
        match self {
            StageData::VerifyUser(form) => form.validate(),
            StageData::Authorship(form) => form.validate(),
            StageData::License(form) => form.validate(workflow_config),
            StageData::Policy(form) => form.validate(),
            StageData::Classification(form) => form.validate(),
            StageData::CrossList(form) => form.validate(submission),
            StageData::Upload(form) => form.validate(),
            StageData::Process(form) => form.validate(),
            StageData::Metadata(form) => form.validate(),
            StageData::OptionalMetadata(form) => form.validate(),
            StageData::FinalPreview(form) => form.validate(submission),
            StageData::Withdrawal(form) => form.validate(),
            StageData::Jref(form) => form.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_format_accepts_archive_and_subject() {
        assert!(is_valid_category("cs.DL"));
        assert!(is_valid_category("math.ST"));
        assert!(is_valid_category("hep-th"));
        assert!(!is_valid_category("CS.DL"));
        assert!(!is_valid_category("cs."));
        assert!(!is_valid_category(""));
    }

    #[test]
    fn doi_format() {
        assert!(is_valid_doi("10.1000/182"));
        assert!(is_valid_doi("10.48550/arXiv.2101.00001"));
        assert!(!is_valid_doi("doi:10.1000/182"));
        assert!(!is_valid_doi("10.1/x"));
    }
}
