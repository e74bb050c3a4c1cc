//! Identity and scope checks.
//!
//! Token verification happens upstream; by the time the controller runs,
//! the request carries a verified identity and its granted scopes. Scopes
//! gate whether the identity may write to a submission at all; they never
//! influence stage sequencing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::Submission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    SubmissionRead,
    SubmissionWrite,
    Administer,
}

/// A verified identity attached to an inbound request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub email: Option<String>,
    pub scopes: HashSet<Scope>,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, scopes: impl IntoIterator<Item = Scope>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
            scopes: scopes.into_iter().collect(),
        }
    }

    /// Owners with write scope may modify their submission; administrators
    /// may modify any.
    pub fn can_write(&self, submission: &Submission) -> bool {
        if self.scopes.contains(&Scope::Administer) {
            return true;
        }
        self.scopes.contains(&Scope::SubmissionWrite) && submission.owner_id == self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_with_write_scope_may_write() {
        let submission = Submission::new("user-1");
        let identity = Identity::new("user-1", [Scope::SubmissionWrite]);
        assert!(identity.can_write(&submission));
    }

    #[test]
    fn non_owner_may_not_write() {
        let submission = Submission::new("user-1");
        let identity = Identity::new("user-2", [Scope::SubmissionWrite]);
        assert!(!identity.can_write(&submission));
    }

    #[test]
    fn read_scope_alone_is_not_enough() {
        let submission = Submission::new("user-1");
        let identity = Identity::new("user-1", [Scope::SubmissionRead]);
        assert!(!identity.can_write(&submission));
    }

    #[test]
    fn administrators_may_write_anywhere() {
        let submission = Submission::new("user-1");
        let identity = Identity::new("admin", [Scope::Administer]);
        assert!(identity.can_write(&submission));
    }
}
