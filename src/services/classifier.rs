//! Classifier service: suggests categories from title and abstract.
//!
//! Advisory only; suggestions never gate a stage.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ServicesConfig;
use crate::domain::Submission;

use super::{http_client, ServiceError};

const SERVICE: &str = "classifier";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: String,
    pub probability: f64,
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn suggestions(
        &self,
        submission: &Submission,
    ) -> Result<Vec<CategorySuggestion>, ServiceError>;
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    title: Option<&'a str>,
    #[serde(rename = "abstract")]
    abstract_text: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct HttpClassifier {
    http: reqwest::Client,
    base: String,
}

impl HttpClassifier {
    pub fn new(config: &ServicesConfig) -> Self {
        Self {
            http: http_client(config.request_timeout_seconds),
            base: config.classifier_endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn suggestions(
        &self,
        submission: &Submission,
    ) -> Result<Vec<CategorySuggestion>, ServiceError> {
        let url = format!("{}/classify", self.base);
        let request = ClassifyRequest {
            title: submission.metadata.title.as_deref(),
            abstract_text: submission.metadata.abstract_text.as_deref(),
        };
        let response = self
            .http
            .post(&url)
            .json(&request)
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
            .json::<Vec<CategorySuggestion>>()
            .await
            .map_err(|source| ServiceError::Decode {
                service: SERVICE,
                source,
            })
    }
}
