// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid push payload: {0}")]
    Payload(String),

    #[error("GitHub API returned {status} for {url}")]
    Api { status: u16, url: String },

    #[error("Commit {sha} contains no files")]
    NoFiles { sha: String },

    #[error("Blob {sha} has unsupported encoding: {encoding}")]
    BlobEncoding { sha: String, encoding: String },

    #[error("Missing blob reference for {path}")]
    MissingBlob { path: String },

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Storage operation failed for {key}: {message}")]
    Storage { key: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
