// file: src/github/models.rs
// description: GitHub commit and blob API response models
// reference: https://docs.github.com/en/rest/commits/commits#get-a-commit

use crate::error::{Result, SyncError};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Change status of one file within a commit diff.
///
/// GitHub also reports statuses like "changed" or "copied"; anything we do
/// not dispatch on specially takes the store path, same as added/modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    #[serde(other)]
    Other,
}

/// One entry of a commit diff. Immutable once deserialized.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChangedFile {
    pub filename: String,
    pub status: FileStatus,
    /// Present only when status is renamed.
    #[serde(default)]
    pub previous_filename: Option<String>,
    /// Blob reference for fetching the file's content.
    #[serde(default)]
    pub sha: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CommitRecord {
    pub sha: String,
    #[serde(default)]
    pub files: Vec<ChangedFile>,
    #[serde(default)]
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlobResponse {
    pub sha: String,
    pub content: String,
    pub encoding: String,
}

impl BlobResponse {
    /// Raw bytes of the blob. GitHub wraps base64 content in newlines, so
    /// ASCII whitespace is stripped before decoding.
    pub fn decode(&self) -> Result<Vec<u8>> {
        match self.encoding.as_str() {
            "base64" => {
                let compact: String = self
                    .content
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                Ok(STANDARD.decode(compact)?)
            }
            "utf-8" => Ok(self.content.clone().into_bytes()),
            other => Err(SyncError::BlobEncoding {
                sha: self.sha.clone(),
                encoding: other.to_string(),
            }),
        }
    }
}
