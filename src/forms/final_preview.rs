//! Final preview and approval stage.

use serde::{Deserialize, Serialize};

use crate::domain::{Submission, SubmissionEvent};

use super::{FieldError, ValidationOutcome};

/// The user approves the rendered preview and finalizes the submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPreviewForm {
    pub proceed: bool,
}

impl FinalPreviewForm {
    pub fn validate(&self, submission: &Submission) -> ValidationOutcome {
        let mut errors = Vec::new();
        if !self.proceed {
            errors.push(FieldError::new(
                "proceed",
                "Please confirm that you have reviewed your submission.",
            ));
        }
        if !submission.preview_confirmed {
            errors.push(FieldError::new(
                "preview",
                "A preview of your submission is not available yet.",
            ));
        }
        if errors.is_empty() {
            ValidationOutcome::Valid(vec![SubmissionEvent::Finalize])
        } else {
            ValidationOutcome::Invalid(errors)
        }
    }
}
