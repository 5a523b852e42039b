// file: src/sync/mod.rs
// description: commit synchronization module exports
// reference: internal module structure

pub mod file;
pub mod orchestrator;
pub mod outcome;

#[cfg(test)]
pub(crate) mod testing;

pub use file::FileSynchronizer;
pub use orchestrator::CommitSynchronizer;
pub use outcome::{SyncAction, SyncOutcome};
