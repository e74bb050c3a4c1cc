//! Stage sequencing for submissions.
//!
//! A submission moves through a fixed, variant-specific order of stages.
//! The pieces:
//! - **Stages and definitions**: the enumerated steps and the per-variant
//!   total orders with required/must-see flags.
//! - **Conditions**: completion predicates over persisted submission data.
//! - **Processor**: the derived per-request view (what is done, what is
//!   current, what may be proceeded to).
//! - **Controller**: the request-facing operations — resolve, authorize,
//!   advance — plus the hooks that fold external service outcomes back
//!   into submission state.

pub mod conditions;
pub mod controller;
pub mod definition;
pub mod errors;
pub mod processor;
pub mod stages;

pub use controller::{Decision, WorkflowController};
pub use definition::WorkflowDefinition;
pub use errors::WorkflowError;
pub use processor::{SeenSet, WorkflowProcessor};
pub use stages::{Stage, StageSpec};
