// file: src/sync/file.rs
// description: maps one changed file to its storage operation
// reference: dispatches on diff status, store = download + decode + put

use crate::error::{Result, SyncError};
use crate::github::client::CommitApi;
use crate::github::models::{ChangedFile, FileStatus};
use crate::storage::content_type;
use crate::storage::store::ObjectStore;
use crate::sync::outcome::{SyncAction, SyncOutcome};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct FileSynchronizer {
    api: Arc<dyn CommitApi>,
    store: Arc<dyn ObjectStore>,
}

impl FileSynchronizer {
    pub fn new(api: Arc<dyn CommitApi>, store: Arc<dyn ObjectStore>) -> Self {
        Self { api, store }
    }

    /// Synchronize one diff entry into the bucket. Every failure is caught
    /// here and recorded in the outcome so one file can never abort the
    /// rest of the commit.
    pub async fn sync_file(&self, file: &ChangedFile, owner: &str, repo: &str) -> SyncOutcome {
        match file.status {
            FileStatus::Removed => self.sync_delete(file).await,
            FileStatus::Renamed => self.sync_rename(file, owner, repo).await,
            _ => self.sync_store(file, owner, repo).await,
        }
    }

    async fn sync_delete(&self, file: &ChangedFile) -> SyncOutcome {
        info!("- Deleting {}", file.filename);

        match self.store.delete_object(&file.filename).await {
            Ok(()) => SyncOutcome::ok(&file.filename, SyncAction::Deleted),
            Err(e) => {
                warn!("Couldn't delete {}: {}", file.filename, e);
                SyncOutcome::failed(&file.filename, SyncAction::Deleted, e)
            }
        }
    }

    /// Delete the old key, then store the new one. Both steps are always
    /// attempted; a delete failure must not suppress the store.
    async fn sync_rename(&self, file: &ChangedFile, owner: &str, repo: &str) -> SyncOutcome {
        let mut errors = Vec::new();

        match file.previous_filename.as_deref() {
            Some(previous) => {
                info!("- Deleting {} (renamed to {})", previous, file.filename);
                if let Err(e) = self.store.delete_object(previous).await {
                    warn!("Couldn't delete {}: {}", previous, e);
                    errors.push(format!("delete {}: {}", previous, e));
                }
            }
            None => {
                warn!(
                    "Renamed file {} carries no previous path, nothing to delete",
                    file.filename
                );
            }
        }

        if let Err(e) = self.store_file(file, owner, repo).await {
            warn!("Couldn't store {}: {}", file.filename, e);
            errors.push(format!("store {}: {}", file.filename, e));
        }

        if errors.is_empty() {
            SyncOutcome::ok(&file.filename, SyncAction::Renamed)
        } else {
            SyncOutcome::failed(&file.filename, SyncAction::Renamed, errors.join("; "))
        }
    }

    async fn sync_store(&self, file: &ChangedFile, owner: &str, repo: &str) -> SyncOutcome {
        info!("+ Storing {}", file.filename);

        match self.store_file(file, owner, repo).await {
            Ok(()) => SyncOutcome::ok(&file.filename, SyncAction::Stored),
            Err(e) => {
                warn!("Couldn't store {}: {}", file.filename, e);
                SyncOutcome::failed(&file.filename, SyncAction::Stored, e)
            }
        }
    }

    async fn store_file(&self, file: &ChangedFile, owner: &str, repo: &str) -> Result<()> {
        let blob_sha = file.sha.as_deref().ok_or_else(|| SyncError::MissingBlob {
            path: file.filename.clone(),
        })?;

        debug!("...downloading {}", file.filename);
        let bytes = self.api.get_blob(owner, repo, blob_sha).await?;

        let content_type = content_type::resolve(&file.filename);
        let body = if content_type::is_utf8_charset(&content_type) {
            // Text payloads are re-encoded as UTF-8, replacing any invalid
            // sequences, matching how the bucket serves textual content.
            String::from_utf8_lossy(&bytes).into_owned().into_bytes()
        } else {
            bytes
        };

        debug!("...putting {} of type {}", file.filename, content_type);
        self.store.put_object(&file.filename, body, &content_type).await
    }
}
