use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for stagegate.
///
/// Constructed once at process start and passed explicitly to the
/// controller and service clients; there is no global accessor.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StagegateConfig {
    /// External service endpoints
    pub services: ServicesConfig,
    /// Workflow policy settings
    pub workflow: WorkflowConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServicesConfig {
    /// File manager service base URL
    pub file_manager_endpoint: String,
    /// Compiler service base URL
    pub compiler_endpoint: String,
    /// Classifier service base URL
    pub classifier_endpoint: String,
    /// Preview service base URL
    pub preview_endpoint: String,
    /// Per-request timeout for all service calls
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkflowConfig {
    /// License URIs a submitter may select
    pub accepted_licenses: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level directive (env-filter syntax)
    pub log_level: String,
    /// Emit structured JSON logs instead of plain text
    pub json_logs: bool,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            file_manager_endpoint: "http://localhost:8001".to_string(),
            compiler_endpoint: "http://localhost:8002".to_string(),
            classifier_endpoint: "http://localhost:8003".to_string(),
            preview_endpoint: "http://localhost:8004".to_string(),
            request_timeout_seconds: 10,
        }
    }
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            accepted_licenses: vec![
                "http://arxiv.org/licenses/nonexclusive-distrib/1.0/".to_string(),
                "http://creativecommons.org/licenses/by/4.0/".to_string(),
                "http://creativecommons.org/licenses/by-sa/4.0/".to_string(),
                "http://creativecommons.org/licenses/by-nc-sa/4.0/".to_string(),
                "http://creativecommons.org/publicdomain/zero/1.0/".to_string(),
            ],
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Default for StagegateConfig {
    fn default() -> Self {
        Self {
            services: ServicesConfig::default(),
            workflow: WorkflowConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl StagegateConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. Configuration file (stagegate.toml)
    /// 3. Environment variables (prefixed with STAGEGATE_)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if Path::new("stagegate.toml").exists() {
            builder = builder.add_source(File::with_name("stagegate"));
        }

        builder = builder.add_source(
            Environment::with_prefix("STAGEGATE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_accepted_licenses() {
        let config = StagegateConfig::default();
        assert!(!config.workflow.accepted_licenses.is_empty());
        assert!(config.services.request_timeout_seconds > 0);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = StagegateConfig::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stagegate.toml");
        config.save_to_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let loaded: StagegateConfig = toml::from_str(&text).unwrap();
        assert_eq!(
            loaded.workflow.accepted_licenses,
            config.workflow.accepted_licenses
        );
        assert_eq!(
            loaded.services.file_manager_endpoint,
            config.services.file_manager_endpoint
        );
    }
}
