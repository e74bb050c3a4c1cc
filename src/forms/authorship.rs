//! Authorship confirmation stage.

use serde::{Deserialize, Serialize};

use crate::domain::SubmissionEvent;

use super::{FieldError, ValidationOutcome};

/// The user states whether they are an author of the work. Submitting on
/// behalf of the authors requires prior approval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorshipForm {
    pub is_author: Option<bool>,
    pub proxy_approval: bool,
}

impl AuthorshipForm {
    pub fn validate(&self) -> ValidationOutcome {
        let Some(is_author) = self.is_author else {
            return ValidationOutcome::Invalid(vec![FieldError::new(
                "authorship",
                "Please choose one.",
            )]);
        };
        if !is_author && !self.proxy_approval {
            return ValidationOutcome::Invalid(vec![FieldError::new(
                "proxy",
                "You must get prior approval to submit on behalf of the authors.",
            )]);
        }
        ValidationOutcome::Valid(vec![SubmissionEvent::ConfirmAuthorship {
            submitter_is_author: is_author,
        }])
    }
}
