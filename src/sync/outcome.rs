// file: src/sync/outcome.rs
// description: per-file synchronization result types
// reference: internal data structures

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncAction {
    Stored,
    Deleted,
    Renamed,
}

/// Outcome of synchronizing one changed file. Failures are captured here
/// and never escalate into a commit-level error.
#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub path: String,
    pub action: SyncAction,
    pub error: Option<String>,
}

impl SyncOutcome {
    pub fn ok(path: impl Into<String>, action: SyncAction) -> Self {
        Self {
            path: path.into(),
            action,
            error: None,
        }
    }

    pub fn failed(path: impl Into<String>, action: SyncAction, error: impl ToString) -> Self {
        Self {
            path: path.into(),
            action,
            error: Some(error.to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
