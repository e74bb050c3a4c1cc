//! The enumerated steps of the submission pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One step of the submission workflow.
///
/// Endpoint keys are stable identifiers used in redirects; labels feed the
/// "please ... before proceeding" messages shown when a redirect happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    VerifyUser,
    Authorship,
    License,
    Policy,
    Classification,
    CrossList,
    FileUpload,
    Process,
    Metadata,
    OptionalMetadata,
    FinalPreview,
    Withdrawal,
    Jref,
    Confirm,
}

impl Stage {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Stage::VerifyUser => "verify_user",
            Stage::Authorship => "authorship",
            Stage::License => "license",
            Stage::Policy => "policy",
            Stage::Classification => "classification",
            Stage::CrossList => "cross_list",
            Stage::FileUpload => "file_upload",
            Stage::Process => "file_process",
            Stage::Metadata => "add_metadata",
            Stage::OptionalMetadata => "add_optional_metadata",
            Stage::FinalPreview => "final_preview",
            Stage::Withdrawal => "withdraw",
            Stage::Jref => "jref",
            Stage::Confirm => "confirmation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::VerifyUser => "verify your personal information",
            Stage::Authorship => "confirm authorship",
            Stage::License => "choose a license",
            Stage::Policy => "accept submission policies",
            Stage::Classification => "select a primary category",
            Stage::CrossList => "add cross-list categories",
            Stage::FileUpload => "upload your submission files",
            Stage::Process => "process your submission files",
            Stage::Metadata => "add required metadata",
            Stage::OptionalMetadata => "add optional metadata",
            Stage::FinalPreview => "preview and approve your submission",
            Stage::Withdrawal => "request withdrawal",
            Stage::Jref => "add journal reference details",
            Stage::Confirm => "your submission is confirmed",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Stage::VerifyUser => "Verify user info",
            Stage::Authorship => "Confirm authorship",
            Stage::License => "Choose license",
            Stage::Policy => "Acknowledge policy",
            Stage::Classification => "Choose category",
            Stage::CrossList => "Add cross-list",
            Stage::FileUpload => "File upload",
            Stage::Process => "File process",
            Stage::Metadata => "Add metadata",
            Stage::OptionalMetadata => "Add optional metadata",
            Stage::FinalPreview => "Final preview",
            Stage::Withdrawal => "Request withdrawal",
            Stage::Jref => "Journal reference",
            Stage::Confirm => "Submission confirmed",
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            Stage::VerifyUser => "Verify User",
            Stage::Authorship => "Authorship",
            Stage::License => "License",
            Stage::Policy => "Policy",
            Stage::Classification => "Category",
            Stage::CrossList => "Cross-list",
            Stage::FileUpload => "Upload Files",
            Stage::Process => "Process Files",
            Stage::Metadata => "Metadata",
            Stage::OptionalMetadata => "Opt. Metadata",
            Stage::FinalPreview => "Preview",
            Stage::Withdrawal => "Withdrawal",
            Stage::Jref => "Journal Reference",
            Stage::Confirm => "Confirmed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

/// A stage as configured by a particular workflow definition.
///
/// `required` stages must be complete to proceed past them; `must_see`
/// stages must additionally have been visited, even when their data is
/// already complete (replacements re-walk stages that carry over data).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageSpec {
    pub stage: Stage,
    pub required: bool,
    pub must_see: bool,
}

impl StageSpec {
    pub const fn required(stage: Stage) -> Self {
        Self {
            stage,
            required: true,
            must_see: false,
        }
    }

    pub const fn required_must_see(stage: Stage) -> Self {
        Self {
            stage,
            required: true,
            must_see: true,
        }
    }

    pub const fn optional_must_see(stage: Stage) -> Self {
        Self {
            stage,
            required: false,
            must_see: true,
        }
    }
}
