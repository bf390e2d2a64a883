use async_trait::async_trait;
use object_store::memory::InMemory;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::object_bucket::ObjectStoreBucket;
use crate::{
    domain::{
        errors::StorageResult,
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::Storage,
};

/// In-memory implementation of Storage for testing and development
#[derive(Clone)]
pub struct InMemoryStorage {
    inner: ObjectStoreBucket,
}

impl InMemoryStorage {
    pub fn new(bucket: BucketName) -> Self {
        Self {
            inner: ObjectStoreBucket::new(Arc::new(InMemory::new()), bucket),
        }
    }

    pub fn bucket(&self) -> &BucketName {
        self.inner.bucket()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn upload(&self, file_path: &Path, key: &ObjectKey) -> StorageResult<ObjectKey> {
        self.inner.upload_file(file_path, key).await
    }

    async fn download(&self, key: &ObjectKey, dest_dir: &Path) -> StorageResult<PathBuf> {
        self.inner.download_file(key, dest_dir).await
    }
}
