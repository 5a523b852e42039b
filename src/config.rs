// file: src/config.rs
// description: application configuration management with environment support
// reference: https://docs.rs/config

use crate::error::{Result, SyncError};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub github: GithubConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    pub token: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub bucket: String,
    /// Custom endpoint URL for LocalStack or MinIO.
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    #[serde(default = "default_max_concurrent_files")]
    pub max_concurrent_files: usize,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_max_concurrent_files() -> usize {
    8
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            max_concurrent_files: default_max_concurrent_files(),
        }
    }
}

impl Config {
    /// Load configuration from an optional file plus `GIT_S3_DEPLOY__*`
    /// environment variables. In the Lambda deployment only the environment
    /// is present, so the file source is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GIT_S3_DEPLOY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| SyncError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| SyncError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            github: GithubConfig {
                token: String::new(),
                api_url: default_api_url(),
            },
            storage: StorageConfig {
                bucket: String::new(),
                endpoint_url: None,
                region: None,
            },
            sync: SyncConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.github.token.is_empty() {
            return Err(SyncError::Config(
                "Couldn't retrieve github token".to_string(),
            ));
        }

        if self.storage.bucket.is_empty() {
            return Err(SyncError::Config(
                "destination bucket must not be empty".to_string(),
            ));
        }

        if self.sync.max_concurrent_files == 0 {
            return Err(SyncError::Config(
                "max_concurrent_files must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
