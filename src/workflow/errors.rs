use thiserror::Error;
use uuid::Uuid;

use crate::domain::StoreError;
use crate::forms::FieldError;
use crate::services::ServiceError;

use super::stages::Stage;

/// Everything that can go wrong while sequencing a submission.
///
/// `ValidationFailed` and `StageUnreachable` are recoverable: the caller
/// redisplays the stage or follows the redirect. A store version conflict
/// never escapes `advance`; it is absorbed by re-deriving from fresh state.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("stage input failed validation")]
    ValidationFailed { errors: Vec<FieldError> },

    #[error("cannot determine workflow variant for submission {submission_id}")]
    UnknownWorkflowVariant { submission_id: Uuid },

    #[error("stage {requested} is not reachable; redirect to {redirect_to}")]
    StageUnreachable {
        requested: Stage,
        redirect_to: Stage,
    },

    #[error("user {user_id} may not modify submission {submission_id}")]
    AccessDenied {
        user_id: String,
        submission_id: Uuid,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}
