// file: src/handler.rs
// description: per-invocation flow: classify, parse, fetch, sync
// reference: ties the classifier, GitHub client, and orchestrator together

use crate::config::SyncConfig;
use crate::error::Result;
use crate::event::classifier::is_push_event;
use crate::event::envelope::SnsEnvelope;
use crate::event::payload::PushPayload;
use crate::github::client::CommitApi;
use crate::storage::store::ObjectStore;
use crate::sync::orchestrator::CommitSynchronizer;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse {
    pub synced: usize,
    pub failed: usize,
    pub skipped: bool,
}

impl HandlerResponse {
    fn skipped() -> Self {
        Self {
            synced: 0,
            failed: 0,
            skipped: true,
        }
    }
}

pub struct PushHandler {
    api: Arc<dyn CommitApi>,
    commits: CommitSynchronizer,
}

impl PushHandler {
    pub fn new(
        api: Arc<dyn CommitApi>,
        store: Arc<dyn ObjectStore>,
        sync_config: &SyncConfig,
    ) -> Self {
        let commits =
            CommitSynchronizer::new(api.clone(), store, sync_config.max_concurrent_files);
        Self { api, commits }
    }

    /// Handle one notification. Non-push events succeed without touching
    /// any API. A push is fatal only when the commit cannot be fetched or
    /// turns out to have no files; per-file failures are tolerated and
    /// surface only in the response counters.
    pub async fn handle(&self, envelope: &SnsEnvelope) -> Result<HandlerResponse> {
        if !is_push_event(envelope) {
            info!("Message was not a github push message. Exiting.");
            return Ok(HandlerResponse::skipped());
        }

        // the classifier guarantees a first record exists
        let message = envelope
            .first_message()
            .map(|m| m.message.as_str())
            .unwrap_or_default();
        let payload = PushPayload::parse(message)?;

        let owner = payload.owner()?;
        let repo = payload.repo();
        let sha = payload.commit_sha();

        info!(
            "Push message received. Will get code from /repos/{}/{}/commits/{}",
            owner, repo, sha
        );

        let commit = self.api.get_commit(owner, repo, sha).await?;
        let outcomes = self.commits.sync_commit(&commit, owner, repo).await?;

        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        info!(
            "Commit parsed and synced (mostly?) successfully: {} ok, {} failed",
            outcomes.len() - failed,
            failed
        );

        Ok(HandlerResponse {
            synced: outcomes.len() - failed,
            failed,
            skipped: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SyncError;
    use crate::event::classifier::GITHUB_EVENT_ATTRIBUTE;
    use crate::event::envelope::{MessageAttribute, SnsMessage, SnsRecord};
    use crate::github::models::{CommitRecord, FileStatus};
    use crate::sync::testing::{FakeCommitApi, RecordingStore, changed_file};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    const SHA: &str = "6113728f27ae07ce7a83e4e153c96d0cce2d0c8b";

    fn push_envelope(event_value: &str) -> SnsEnvelope {
        let mut attributes = HashMap::new();
        attributes.insert(
            GITHUB_EVENT_ATTRIBUTE.to_string(),
            MessageAttribute {
                data_type: "String".to_string(),
                value: event_value.to_string(),
            },
        );

        let payload = format!(
            r#"{{ "repository": {{ "full_name": "kevintech/site", "name": "site" }},
                 "head_commit": {{ "id": "{}" }} }}"#,
            SHA
        );

        SnsEnvelope {
            records: vec![SnsRecord {
                sns: SnsMessage {
                    message: payload,
                    message_attributes: attributes,
                },
            }],
        }
    }

    fn handler(
        api: Arc<FakeCommitApi>,
        store: Arc<RecordingStore>,
    ) -> PushHandler {
        PushHandler::new(api, store, &SyncConfig::default())
    }

    #[tokio::test]
    async fn test_non_push_event_is_skipped_without_api_calls() {
        let api = Arc::new(FakeCommitApi::default());
        let store = Arc::new(RecordingStore::default());
        let handler = handler(api.clone(), store.clone());

        let response = handler.handle(&push_envelope("issues")).await.unwrap();

        assert!(response.skipped);
        assert!(api.commit_requests().is_empty());
        assert!(store.put_calls().is_empty());
    }

    #[tokio::test]
    async fn test_push_event_syncs_commit_files() {
        let api = Arc::new(FakeCommitApi::default());
        api.insert_blob("blob1", b"hello");
        api.insert_commit(CommitRecord {
            sha: SHA.to_string(),
            files: vec![changed_file(
                "index.html",
                FileStatus::Modified,
                None,
                Some("blob1"),
            )],
            html_url: None,
        });
        let store = Arc::new(RecordingStore::default());
        let handler = handler(api.clone(), store.clone());

        let response = handler.handle(&push_envelope("push")).await.unwrap();

        assert!(!response.skipped);
        assert_eq!(response.synced, 1);
        assert_eq!(response.failed, 0);
        assert_eq!(api.commit_requests(), vec![SHA.to_string()]);
        assert_eq!(store.put_calls()[0].key, "index.html");
    }

    #[tokio::test]
    async fn test_commit_fetch_failure_is_fatal() {
        // no commit registered, the fake answers 404
        let api = Arc::new(FakeCommitApi::default());
        let store = Arc::new(RecordingStore::default());
        let handler = handler(api, store.clone());

        let result = handler.handle(&push_envelope("push")).await;

        assert!(matches!(result, Err(SyncError::Api { status: 404, .. })));
        assert!(store.put_calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_commit_fails_invocation() {
        let api = Arc::new(FakeCommitApi::default());
        api.insert_commit(CommitRecord {
            sha: SHA.to_string(),
            files: vec![],
            html_url: None,
        });
        let store = Arc::new(RecordingStore::default());
        let handler = handler(api, store.clone());

        let result = handler.handle(&push_envelope("push")).await;

        assert!(matches!(result, Err(SyncError::NoFiles { .. })));
        assert!(store.put_calls().is_empty());
        assert!(store.deleted_keys().is_empty());
    }

    #[tokio::test]
    async fn test_partial_failure_still_reports_success() {
        let api = Arc::new(FakeCommitApi::default());
        api.insert_blob("blob1", b"one");
        api.insert_commit(CommitRecord {
            sha: SHA.to_string(),
            files: vec![
                changed_file("one.txt", FileStatus::Added, None, Some("blob1")),
                changed_file("two.txt", FileStatus::Added, None, Some("missing")),
            ],
            html_url: None,
        });
        let store = Arc::new(RecordingStore::default());
        let handler = handler(api, store);

        let response = handler.handle(&push_envelope("push")).await.unwrap();

        assert_eq!(response.synced, 1);
        assert_eq!(response.failed, 1);
    }
}
