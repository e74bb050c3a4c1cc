//! Cross-list category selection.
//!
//! Optional within the new-submission workflow, required as the single
//! stage of a cross-list request. An empty selection validates; a category
//! that duplicates the primary does not.

use serde::{Deserialize, Serialize};

use crate::domain::{Submission, SubmissionEvent};

use super::{is_valid_category, FieldError, ValidationOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossListForm {
    pub categories: Vec<String>,
}

impl CrossListForm {
    pub fn validate(&self, submission: &Submission) -> ValidationOutcome {
        let mut errors = Vec::new();
        for (idx, category) in self.categories.iter().enumerate() {
            if !is_valid_category(category) {
                errors.push(FieldError::new(
                    format!("categories[{idx}]"),
                    format!("'{category}' is not a valid category."),
                ));
                continue;
            }
            if submission.primary_classification.as_deref() == Some(category.as_str()) {
                errors.push(FieldError::new(
                    format!("categories[{idx}]"),
                    format!("'{category}' is already the primary category."),
                ));
            }
            if self.categories[..idx].contains(category) {
                errors.push(FieldError::new(
                    format!("categories[{idx}]"),
                    format!("'{category}' is listed more than once."),
                ));
            }
        }
        if errors.is_empty() {
            ValidationOutcome::Valid(vec![SubmissionEvent::SetSecondaryClassifications {
                categories: self.categories.clone(),
            }])
        } else {
            ValidationOutcome::Invalid(errors)
        }
    }
}
