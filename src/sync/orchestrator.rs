// file: src/sync/orchestrator.rs
// description: fans the file synchronizer out over a commit's changed files
// reference: fire-and-collect over futures::stream::buffer_unordered

use crate::error::{Result, SyncError};
use crate::github::client::CommitApi;
use crate::github::models::CommitRecord;
use crate::storage::store::ObjectStore;
use crate::sync::file::FileSynchronizer;
use crate::sync::outcome::SyncOutcome;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{info, warn};

pub struct CommitSynchronizer {
    files: FileSynchronizer,
    max_concurrent_files: usize,
}

impl CommitSynchronizer {
    pub fn new(
        api: Arc<dyn CommitApi>,
        store: Arc<dyn ObjectStore>,
        max_concurrent_files: usize,
    ) -> Self {
        Self {
            files: FileSynchronizer::new(api, store),
            max_concurrent_files: max_concurrent_files.max(1),
        }
    }

    /// Synchronize every changed file of the commit into the bucket.
    ///
    /// All files are attempted regardless of individual failures; the only
    /// error path is a commit with no files at all. The batch is "done"
    /// once every outcome has settled, not "succeeded" or "failed".
    pub async fn sync_commit(
        &self,
        commit: &CommitRecord,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<SyncOutcome>> {
        if commit.files.is_empty() {
            warn!(
                "Commit at {} had no files. Exiting.",
                commit.html_url.as_deref().unwrap_or(&commit.sha)
            );
            return Err(SyncError::NoFiles {
                sha: commit.sha.clone(),
            });
        }

        info!(
            "Syncing {} changed files from commit {}",
            commit.files.len(),
            commit.sha
        );

        let outcomes: Vec<SyncOutcome> = stream::iter(
            commit
                .files
                .iter()
                .map(|file| self.files.sync_file(file, owner, repo)),
        )
        .buffer_unordered(self.max_concurrent_files)
        .collect()
        .await;

        let failed = outcomes.iter().filter(|outcome| !outcome.is_ok()).count();
        if failed > 0 {
            warn!(
                "Commit synced with {} of {} files failing",
                failed,
                outcomes.len()
            );
        } else {
            info!("All {} files synced successfully", outcomes.len());
        }

        Ok(outcomes)
    }
}
