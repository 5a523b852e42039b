// file: src/event/payload.rs
// description: GitHub push payload parsing and owner/repo resolution
// reference: https://docs.github.com/en/webhooks/webhook-events-and-payloads#push

use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PushPayload {
    pub repository: Repository,
    pub head_commit: HeadCommit,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Repository {
    /// "owner/repo" form.
    pub full_name: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HeadCommit {
    /// Commit SHA at the head of the pushed branch.
    pub id: String,
}

impl PushPayload {
    pub fn parse(message: &str) -> Result<Self> {
        serde_json::from_str(message)
            .map_err(|e| SyncError::Payload(format!("push payload did not parse: {}", e)))
    }

    /// Repository owner, everything before the first '/' of `full_name`.
    pub fn owner(&self) -> Result<&str> {
        let owner = self
            .repository
            .full_name
            .split('/')
            .next()
            .unwrap_or_default();

        if owner.is_empty() {
            return Err(SyncError::Payload(format!(
                "repository full_name '{}' has no owner",
                self.repository.full_name
            )));
        }

        Ok(owner)
    }

    pub fn repo(&self) -> &str {
        &self.repository.name
    }

    pub fn commit_sha(&self) -> &str {
        &self.head_commit.id
    }
}
