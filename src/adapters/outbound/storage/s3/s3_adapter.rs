use async_trait::async_trait;
use object_store::{aws::AmazonS3Builder, ObjectStore as ObjectStoreBackend};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::{
    adapters::outbound::storage::{
        error::StoreError,
        object_bucket::{single_attempt, ObjectStoreBucket},
    },
    domain::{
        errors::StorageResult,
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::Storage,
};

/// S3 storage adapter using ambient credentials and the default endpoint
#[derive(Clone)]
pub struct S3Storage {
    inner: ObjectStoreBucket,
}

impl S3Storage {
    /// Connect to `bucket` with the runtime's credential chain
    /// (`AWS_ACCESS_KEY_ID`/`AWS_SESSION_TOKEN`, container or instance
    /// credentials) and region. Failed requests are not retried.
    pub fn new(bucket: BucketName) -> Result<Self, StoreError> {
        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket.as_str())
            .with_retry(single_attempt())
            .build()?;

        Ok(Self::with_store(Arc::new(store), bucket))
    }

    /// Create an adapter over an already built backend
    pub fn with_store(store: Arc<dyn ObjectStoreBackend>, bucket: BucketName) -> Self {
        Self {
            inner: ObjectStoreBucket::new(store, bucket),
        }
    }

    pub fn bucket(&self) -> &BucketName {
        self.inner.bucket()
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn upload(&self, file_path: &Path, key: &ObjectKey) -> StorageResult<ObjectKey> {
        self.inner.upload_file(file_path, key).await
    }

    async fn download(&self, key: &ObjectKey, dest_dir: &Path) -> StorageResult<PathBuf> {
        self.inner.download_file(key, dest_dir).await
    }
}
