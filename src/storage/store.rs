// file: src/storage/store.rs
// description: object storage seam used by the file synchronizer
// reference: internal trait boundary, mockable for test

use crate::error::Result;
use async_trait::async_trait;

/// Bucket-style store addressed by string keys. Keys are the repository
/// file paths verbatim.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Blind overwrite of the object at `key` with a public-read policy.
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()>;

    /// Delete the object at `key`. Deleting a missing key succeeds.
    async fn delete_object(&self, key: &str) -> Result<()>;
}
