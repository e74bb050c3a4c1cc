//! File manager service: holds uploaded source packages per submission.

use async_trait::async_trait;
use uuid::Uuid;

use crate::config::ServicesConfig;
use crate::domain::SourceContent;

use super::{http_client, ServiceError};

const SERVICE: &str = "filemanager";

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait FileManager: Send + Sync {
    /// Current summary of the uploaded source for a submission, including
    /// per-file validation problems reported by the service.
    async fn source_summary(&self, submission_id: Uuid) -> Result<SourceContent, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpFileManager {
    http: reqwest::Client,
    base: String,
}

impl HttpFileManager {
    pub fn new(config: &ServicesConfig) -> Self {
        Self {
            http: http_client(config.request_timeout_seconds),
            base: config.file_manager_endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl FileManager for HttpFileManager {
    async fn source_summary(&self, submission_id: Uuid) -> Result<SourceContent, ServiceError> {
        let url = format!("{}/submissions/{submission_id}/source", self.base);
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
        response
            .json::<SourceContent>()
            .await
            .map_err(|source| ServiceError::Decode {
                service: SERVICE,
                source,
            })
    }
}
