//! License selection stage.

use serde::{Deserialize, Serialize};

use crate::config::WorkflowConfig;
use crate::domain::SubmissionEvent;

use super::{FieldError, ValidationOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseForm {
    pub license_uri: String,
}

impl LicenseForm {
    pub fn validate(&self, workflow_config: &WorkflowConfig) -> ValidationOutcome {
        if self.license_uri.is_empty() {
            return ValidationOutcome::Invalid(vec![FieldError::new(
                "license",
                "Please select a license.",
            )]);
        }
        if !workflow_config
            .accepted_licenses
            .iter()
            .any(|uri| uri == &self.license_uri)
        {
            return ValidationOutcome::Invalid(vec![FieldError::new(
                "license",
                "Not a valid license selection.",
            )]);
        }
        ValidationOutcome::Valid(vec![SubmissionEvent::SelectLicense {
            license_uri: self.license_uri.clone(),
        }])
    }
}
