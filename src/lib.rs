// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod event;
pub mod github;
pub mod handler;
pub mod storage;
pub mod sync;
pub mod utils;

pub use config::{Config, GithubConfig, StorageConfig, SyncConfig};
pub use error::{Result, SyncError};
pub use event::{PushPayload, SnsEnvelope, SnsMessage, SnsRecord, is_push_event};
pub use github::{ChangedFile, CommitApi, CommitRecord, FileStatus, GithubClient};
pub use handler::{HandlerResponse, PushHandler};
pub use storage::{ObjectStore, S3ObjectStore};
pub use sync::{CommitSynchronizer, FileSynchronizer, SyncAction, SyncOutcome};
