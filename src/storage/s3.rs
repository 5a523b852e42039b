// file: src/storage/s3.rs
// description: S3-backed object store with public-read uploads
// reference: https://docs.rs/aws-sdk-s3

use crate::config::StorageConfig;
use crate::error::{Result, SyncError};
use crate::storage::store::ObjectStore;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use tracing::debug;

pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Build a store from the ambient AWS environment, honoring the
    /// optional region and endpoint overrides (LocalStack, MinIO).
    pub async fn new(config: &StorageConfig) -> Self {
        let mut aws_config_loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(ref region) = config.region {
            aws_config_loader =
                aws_config_loader.region(aws_sdk_s3::config::Region::new(region.clone()));
        }

        let aws_config = aws_config_loader.load().await;

        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(&aws_config);

        if let Some(ref endpoint) = config.endpoint_url {
            s3_config_builder = s3_config_builder
                .endpoint_url(endpoint)
                .force_path_style(true);
        }

        let client = Client::from_conf(s3_config_builder.build());

        Self {
            client,
            bucket: config.bucket.clone(),
        }
    }

    pub fn with_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        debug!("putting s3://{}/{} as {}", self.bucket, key, content_type);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| SyncError::Storage {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        debug!("deleting s3://{}/{}", self.bucket, key);

        // S3 DeleteObject returns success for keys that do not exist, so
        // repeated deletes are indistinguishable from the first one.
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| SyncError::Storage {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}
