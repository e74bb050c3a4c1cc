//! Compiler service: builds TeX/PostScript source into a readable product.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ServicesConfig;

use super::{http_client, JobStatus, ServiceError};

const SERVICE: &str = "compiler";

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Compiler: Send + Sync {
    /// Status of the compilation job for a source package, keyed by the
    /// package checksum.
    async fn job_status(&self, checksum: &str) -> Result<JobStatus, ServiceError>;
}

#[derive(Debug, Deserialize)]
struct JobStatusResponse {
    status: JobStatus,
}

#[derive(Debug, Clone)]
pub struct HttpCompiler {
    http: reqwest::Client,
    base: String,
}

impl HttpCompiler {
    pub fn new(config: &ServicesConfig) -> Self {
        Self {
            http: http_client(config.request_timeout_seconds),
            base: config.compiler_endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Compiler for HttpCompiler {
    async fn job_status(&self, checksum: &str) -> Result<JobStatus, ServiceError> {
        let url = format!("{}/jobs/{checksum}", self.base);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ServiceError::Request {
                service: SERVICE,
                source,
            })?;
        if !response.status().is_success() {
            return Err(ServiceError::BadStatus {
                service: SERVICE,
                status: response.status().as_u16(),
            });
        }
        let body = response
            .json::<JobStatusResponse>()
            .await
            .map_err(|source| ServiceError::Decode {
                service: SERVICE,
                source,
            })?;
        Ok(body.status)
    }
}
