//! Policy acknowledgement stage.

use serde::{Deserialize, Serialize};

use crate::domain::SubmissionEvent;

use super::{FieldError, ValidationOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyForm {
    pub policy: bool,
}

impl PolicyForm {
    pub fn validate(&self) -> ValidationOutcome {
        if self.policy {
            ValidationOutcome::Valid(vec![SubmissionEvent::AcceptPolicy])
        } else {
            ValidationOutcome::Invalid(vec![FieldError::new(
                "policy",
                "You must agree to the submission policies to proceed.",
            )])
        }
    }
}
