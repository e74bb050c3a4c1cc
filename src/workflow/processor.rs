//! Derived per-request view of a submission's progress through a workflow.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::Submission;

use super::conditions;
use super::definition::WorkflowDefinition;
use super::stages::{Stage, StageSpec};

/// Which stages the user has visited, keyed by workflow so a replacement
/// does not inherit the visit history of the original submission.
///
/// Callers persist this alongside the session; the processor only reads
/// and writes it through this interface.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeenSet {
    seen: HashMap<String, bool>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(workflow: &str, stage: Stage) -> String {
        format!("{workflow}---{}", stage.endpoint())
    }

    pub fn mark_seen(&mut self, workflow: &str, stage: Stage) {
        self.seen.insert(Self::key(workflow, stage), true);
    }

    pub fn is_seen(&self, workflow: &str, stage: Stage) -> bool {
        self.seen
            .get(&Self::key(workflow, stage))
            .copied()
            .unwrap_or(false)
    }
}

/// Evaluates a submission against a workflow definition.
///
/// Recomputed on every request from persisted data; it has no identity or
/// storage of its own.
#[derive(Debug)]
pub struct WorkflowProcessor<'a> {
    pub definition: &'static WorkflowDefinition,
    submission: &'a Submission,
    seen: &'a SeenSet,
}

impl<'a> WorkflowProcessor<'a> {
    pub fn new(
        definition: &'static WorkflowDefinition,
        submission: &'a Submission,
        seen: &'a SeenSet,
    ) -> Self {
        Self {
            definition,
            submission,
            seen,
        }
    }

    /// The whole workflow is complete once the submission is finalized.
    pub fn is_complete(&self) -> bool {
        self.submission.is_finalized
    }

    /// A stage is done when it is complete (if required) and has been seen
    /// (if it must be seen). An optional stage with data in any state is
    /// done as soon as it has been visited.
    pub fn is_done(&self, spec: &StageSpec) -> bool {
        (!spec.required || conditions::is_complete(spec.stage, self.submission))
            && (!spec.must_see || self.seen.is_seen(self.definition.name, spec.stage))
    }

    /// Whether the user may proceed to `stage`: every stage before it in
    /// the order must be done (every stage, for the confirmation stage).
    pub fn can_proceed_to(&self, stage: Stage) -> bool {
        self.definition
            .iter_prior(stage)
            .all(|spec| self.is_done(spec))
    }

    /// First stage in the order that is not done; the confirmation stage
    /// when everything is.
    pub fn current_stage(&self) -> Stage {
        self.definition
            .order
            .iter()
            .find(|spec| !self.is_done(spec))
            .map(|spec| spec.stage)
            .unwrap_or(self.definition.confirmation)
    }
}
