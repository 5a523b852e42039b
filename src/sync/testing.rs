// file: src/sync/testing.rs
// description: in-memory fakes for the API and storage seams, test-only

use crate::error::{Result, SyncError};
use crate::github::client::CommitApi;
use crate::github::models::{ChangedFile, CommitRecord, FileStatus};
use crate::storage::store::ObjectStore;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub(crate) fn changed_file(
    filename: &str,
    status: FileStatus,
    previous_filename: Option<&str>,
    sha: Option<&str>,
) -> ChangedFile {
    ChangedFile {
        filename: filename.to_string(),
        status,
        previous_filename: previous_filename.map(str::to_string),
        sha: sha.map(str::to_string),
    }
}

/// CommitApi fake serving commits and blobs from in-memory maps and
/// recording every request it sees.
#[derive(Default)]
pub(crate) struct FakeCommitApi {
    commits: Mutex<HashMap<String, CommitRecord>>,
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    commit_requests: Mutex<Vec<String>>,
    blob_requests: Mutex<Vec<String>>,
}

impl FakeCommitApi {
    pub fn insert_commit(&self, commit: CommitRecord) {
        self.commits
            .lock()
            .unwrap()
            .insert(commit.sha.clone(), commit);
    }

    pub fn insert_blob(&self, sha: &str, bytes: &[u8]) {
        self.blobs
            .lock()
            .unwrap()
            .insert(sha.to_string(), bytes.to_vec());
    }

    pub fn commit_requests(&self) -> Vec<String> {
        self.commit_requests.lock().unwrap().clone()
    }

    pub fn blob_requests(&self) -> Vec<String> {
        self.blob_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommitApi for FakeCommitApi {
    async fn get_commit(&self, _owner: &str, _repo: &str, sha: &str) -> Result<CommitRecord> {
        self.commit_requests.lock().unwrap().push(sha.to_string());

        self.commits
            .lock()
            .unwrap()
            .get(sha)
            .cloned()
            .ok_or_else(|| SyncError::Api {
                status: 404,
                url: format!("/commits/{}", sha),
            })
    }

    async fn get_blob(&self, _owner: &str, _repo: &str, sha: &str) -> Result<Vec<u8>> {
        self.blob_requests.lock().unwrap().push(sha.to_string());

        self.blobs
            .lock()
            .unwrap()
            .get(sha)
            .cloned()
            .ok_or_else(|| SyncError::Api {
                status: 404,
                url: format!("/git/blobs/{}", sha),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PutCall {
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

/// ObjectStore fake recording puts and deletes. Deleting any key succeeds
/// unless explicitly told to fail, mirroring S3's idempotent deletes.
#[derive(Default)]
pub(crate) struct RecordingStore {
    puts: Mutex<Vec<PutCall>>,
    deletes: Mutex<Vec<String>>,
    failing_puts: Mutex<HashSet<String>>,
    failing_deletes: Mutex<HashSet<String>>,
}

impl RecordingStore {
    pub fn fail_put(&self, key: &str) {
        self.failing_puts.lock().unwrap().insert(key.to_string());
    }

    pub fn fail_delete(&self, key: &str) {
        self.failing_deletes.lock().unwrap().insert(key.to_string());
    }

    pub fn put_calls(&self) -> Vec<PutCall> {
        self.puts.lock().unwrap().clone()
    }

    pub fn deleted_keys(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        if self.failing_puts.lock().unwrap().contains(key) {
            return Err(SyncError::Storage {
                key: key.to_string(),
                message: "injected put failure".to_string(),
            });
        }

        self.puts.lock().unwrap().push(PutCall {
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        if self.failing_deletes.lock().unwrap().contains(key) {
            return Err(SyncError::Storage {
                key: key.to_string(),
                message: "injected delete failure".to_string(),
            });
        }

        self.deletes.lock().unwrap().push(key.to_string());
        Ok(())
    }
}
