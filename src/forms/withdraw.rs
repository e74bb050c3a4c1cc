//! Withdrawal request stage.

use serde::{Deserialize, Serialize};

use crate::domain::SubmissionEvent;

use super::{check_length, ValidationOutcome};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalForm {
    pub reason: String,
}

impl WithdrawalForm {
    pub fn validate(&self) -> ValidationOutcome {
        let mut errors = Vec::new();
        check_length(&mut errors, "withdrawal_reason", &self.reason, 1, 400);
        if errors.is_empty() {
            ValidationOutcome::Valid(vec![SubmissionEvent::RequestWithdrawal {
                reason: self.reason.trim().to_string(),
            }])
        } else {
            ValidationOutcome::Invalid(errors)
        }
    }
}
