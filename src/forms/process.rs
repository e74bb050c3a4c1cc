//! Source processing stage.
//!
//! The stage completes only once the compiler reports a terminal success;
//! an in-progress or failed job keeps the user on this stage.

use serde::{Deserialize, Serialize};

use crate::domain::SubmissionEvent;
use crate::services::JobStatus;

use super::{FieldError, ValidationOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessForm {
    pub job: JobStatus,
}

impl ProcessForm {
    pub fn validate(&self) -> ValidationOutcome {
        match self.job {
            JobStatus::Succeeded => {
                ValidationOutcome::Valid(vec![SubmissionEvent::ConfirmSourceProcessed])
            }
            JobStatus::InProgress => ValidationOutcome::Invalid(vec![FieldError::new(
                "process",
                "Your submission is still being processed.",
            )]),
            JobStatus::Failed => ValidationOutcome::Invalid(vec![FieldError::new(
                "process",
                "Processing failed; please correct your source files and try again.",
            )]),
        }
    }
}
