//! Primary classification stage.

use serde::{Deserialize, Serialize};

use crate::domain::SubmissionEvent;

use super::{is_valid_category, FieldError, ValidationOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationForm {
    pub category: String,
}

impl ClassificationForm {
    pub fn validate(&self) -> ValidationOutcome {
        if self.category.is_empty() {
            return ValidationOutcome::Invalid(vec![FieldError::new(
                "category",
                "Please select a primary category.",
            )]);
        }
        if !is_valid_category(&self.category) {
            return ValidationOutcome::Invalid(vec![FieldError::new(
                "category",
                "Not a valid category.",
            )]);
        }
        ValidationOutcome::Valid(vec![SubmissionEvent::SetPrimaryClassification {
            category: self.category.clone(),
        }])
    }
}
