//! Contracts with the external services the workflow depends on.
//!
//! The controller only needs each collaborator's success/failure signal;
//! the heavy lifting (storage, compilation, rendering) happens elsewhere.
//! Each contract is a trait with a reqwest-backed implementation.

pub mod classifier;
pub mod compiler;
pub mod filemanager;
pub mod preview;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use classifier::{CategorySuggestion, Classifier, HttpClassifier};
pub use compiler::{Compiler, HttpCompiler};
pub use filemanager::{FileManager, HttpFileManager};
pub use preview::{HttpPreview, Preview};

/// Terminal or pending state of an asynchronous service job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    InProgress,
    Succeeded,
    Failed,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to {service} failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{service} returned unexpected status {status}")]
    BadStatus { service: &'static str, status: u16 },
    #[error("could not decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

pub(crate) fn http_client(timeout_seconds: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_seconds))
        .build()
        .unwrap_or_default()
}
