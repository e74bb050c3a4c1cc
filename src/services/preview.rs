//! Preview service: renders the processed source for final review.

use async_trait::async_trait;

use crate::config::ServicesConfig;

use super::{http_client, ServiceError};

const SERVICE: &str = "preview";

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Preview: Send + Sync {
    /// Whether a rendered preview exists for a source package.
    async fn is_available(&self, checksum: &str) -> Result<bool, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpPreview {
    http: reqwest::Client,
    base: String,
}

impl HttpPreview {
    pub fn new(config: &ServicesConfig) -> Self {
        Self {
            http: http_client(config.request_timeout_seconds),
            base: config.preview_endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Preview for HttpPreview {
    async fn is_available(&self, checksum: &str) -> Result<bool, ServiceError> {
        let url = format!("{}/previews/{checksum}", self.base);
        let response = self
            .http
            .head(&url)
            .send()
            .await
            .map_err(|source| ServiceError::Request {
                service: SERVICE,
                source,
            })?;
        match response.status().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            status => Err(ServiceError::BadStatus {
                service: SERVICE,
                status,
            }),
        }
    }
}
