// file: src/github/mod.rs
// description: GitHub API module exports
// reference: internal module structure

pub mod client;
pub mod models;

pub use client::{CommitApi, GithubClient};
pub use models::{BlobResponse, ChangedFile, CommitRecord, FileStatus};
