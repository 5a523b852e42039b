// file: src/github/client.rs
// description: GitHub REST API client for commit metadata and blob content
// reference: https://docs.github.com/en/rest

use crate::config::GithubConfig;
use crate::error::{Result, SyncError};
use crate::github::models::{BlobResponse, CommitRecord};
use async_trait::async_trait;
use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::debug;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Read-only slice of the GitHub API the synchronizer needs. Kept as a
/// trait so tests can substitute an in-memory fake.
#[async_trait]
pub trait CommitApi: Send + Sync {
    /// Fetch commit metadata including the changed-file list.
    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<CommitRecord>;

    /// Fetch and decode a blob's raw bytes.
    async fn get_blob(&self, owner: &str, repo: &str, sha: &str) -> Result<Vec<u8>>;
}

pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(config: GithubConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::Api {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CommitApi for GithubClient {
    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<CommitRecord> {
        let url = format!("{}/repos/{}/{}/commits/{}", self.api_url, owner, repo, sha);
        self.get_json(&url).await
    }

    async fn get_blob(&self, owner: &str, repo: &str, sha: &str) -> Result<Vec<u8>> {
        let url = format!("{}/repos/{}/{}/git/blobs/{}", self.api_url, owner, repo, sha);
        let blob: BlobResponse = self.get_json(&url).await?;
        blob.decode()
    }
}
