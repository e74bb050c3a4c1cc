//! File upload stage.
//!
//! The form is built from the file manager's source summary rather than
//! from user input; per-file problems reported by the service become field
//! errors against the offending files.

use serde::{Deserialize, Serialize};

use crate::domain::{SourceContent, SubmissionEvent};

use super::{FieldError, ValidationOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadForm {
    pub content: SourceContent,
}

impl UploadForm {
    pub fn from_summary(content: SourceContent) -> Self {
        Self { content }
    }

    pub fn validate(&self) -> ValidationOutcome {
        let mut errors = Vec::new();
        for file in &self.content.files {
            for problem in &file.errors {
                errors.push(FieldError::new(file.name.clone(), problem.clone()));
            }
        }
        if !self.content.is_valid() {
            errors.push(FieldError::new(
                "source",
                "The uploaded content is not a usable submission source.",
            ));
        }
        if errors.is_empty() {
            ValidationOutcome::Valid(vec![SubmissionEvent::SetUploadedContent {
                content: self.content.clone(),
            }])
        } else {
            ValidationOutcome::Invalid(errors)
        }
    }
}
