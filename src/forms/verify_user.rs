//! Contact-information verification stage.

use serde::{Deserialize, Serialize};

use crate::domain::SubmissionEvent;

use super::{FieldError, ValidationOutcome};

/// The user confirms that their profile information is current.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyUserForm {
    pub verify_user: bool,
}

impl VerifyUserForm {
    pub fn validate(&self) -> ValidationOutcome {
        if self.verify_user {
            ValidationOutcome::Valid(vec![SubmissionEvent::ConfirmContactInformation])
        } else {
            ValidationOutcome::Invalid(vec![FieldError::new(
                "verify_user",
                "Please confirm that your contact information is current.",
            )])
        }
    }
}
