//! Ordered stage sequences, one per workflow variant.
//!
//! Each variant is a fixed total order of stage descriptors plus a terminal
//! confirmation stage. There is no branching within a variant; optional
//! stages stay in the order and are simply never blocking.

use crate::domain::WorkflowVariant;

use super::stages::{Stage, StageSpec};

/// A named, ordered stage sequence with a terminal confirmation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowDefinition {
    pub name: &'static str,
    pub order: &'static [StageSpec],
    pub confirmation: Stage,
}

static NEW_SUBMISSION: WorkflowDefinition = WorkflowDefinition {
    name: "SubmissionWorkflow",
    order: &[
        StageSpec::required(Stage::VerifyUser),
        StageSpec::required(Stage::Authorship),
        StageSpec::required(Stage::License),
        StageSpec::required(Stage::Policy),
        StageSpec::required(Stage::Classification),
        StageSpec::optional_must_see(Stage::CrossList),
        StageSpec::required(Stage::FileUpload),
        StageSpec::required(Stage::Process),
        StageSpec::required(Stage::Metadata),
        StageSpec::optional_must_see(Stage::OptionalMetadata),
        StageSpec::required(Stage::FinalPreview),
    ],
    confirmation: Stage::Confirm,
};

static REPLACEMENT: WorkflowDefinition = WorkflowDefinition {
    name: "ReplacementWorkflow",
    order: &[
        StageSpec::required_must_see(Stage::VerifyUser),
        StageSpec::required_must_see(Stage::Authorship),
        StageSpec::required_must_see(Stage::License),
        StageSpec::required_must_see(Stage::Policy),
        StageSpec::required_must_see(Stage::FileUpload),
        StageSpec::required_must_see(Stage::Process),
        StageSpec::required_must_see(Stage::Metadata),
        StageSpec::optional_must_see(Stage::OptionalMetadata),
        StageSpec::required_must_see(Stage::FinalPreview),
    ],
    confirmation: Stage::Confirm,
};

static WITHDRAWAL: WorkflowDefinition = WorkflowDefinition {
    name: "WithdrawalWorkflow",
    order: &[StageSpec::required(Stage::Withdrawal)],
    confirmation: Stage::Confirm,
};

static JREF: WorkflowDefinition = WorkflowDefinition {
    name: "JrefWorkflow",
    order: &[StageSpec::required(Stage::Jref)],
    confirmation: Stage::Confirm,
};

static CROSS_LIST: WorkflowDefinition = WorkflowDefinition {
    name: "CrossListWorkflow",
    order: &[StageSpec::required(Stage::CrossList)],
    confirmation: Stage::Confirm,
};

impl WorkflowDefinition {
    pub fn for_variant(variant: WorkflowVariant) -> &'static WorkflowDefinition {
        match variant {
            WorkflowVariant::New => &NEW_SUBMISSION,
            WorkflowVariant::Replacement => &REPLACEMENT,
            WorkflowVariant::Withdrawal => &WITHDRAWAL,
            WorkflowVariant::Jref => &JREF,
            WorkflowVariant::CrossList => &CROSS_LIST,
        }
    }

    pub fn contains(&self, stage: Stage) -> bool {
        stage == self.confirmation || self.position(stage).is_some()
    }

    pub fn position(&self, stage: Stage) -> Option<usize> {
        self.order.iter().position(|spec| spec.stage == stage)
    }

    pub fn spec_for(&self, stage: Stage) -> Option<&StageSpec> {
        self.order.iter().find(|spec| spec.stage == stage)
    }

    /// Stage after `stage` in the order; the confirmation stage after the
    /// last ordered stage; `None` past the end.
    pub fn next_stage(&self, stage: Stage) -> Option<Stage> {
        if stage == self.confirmation {
            return None;
        }
        let idx = self.position(stage)?;
        match self.order.get(idx + 1) {
            Some(spec) => Some(spec.stage),
            None => Some(self.confirmation),
        }
    }

    pub fn previous_stage(&self, stage: Stage) -> Option<Stage> {
        if stage == self.confirmation {
            return self.order.last().map(|spec| spec.stage);
        }
        let idx = self.position(stage)?;
        idx.checked_sub(1).map(|prev| self.order[prev].stage)
    }

    /// Stages strictly before `stage` in the order. For the confirmation
    /// stage this is the whole order.
    pub fn iter_prior(&self, stage: Stage) -> impl Iterator<Item = &StageSpec> {
        let end = if stage == self.confirmation {
            self.order.len()
        } else {
            self.position(stage).unwrap_or(0)
        };
        self.order[..end].iter()
    }
}
