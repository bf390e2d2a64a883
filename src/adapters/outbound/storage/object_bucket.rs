use object_store::{
    path::Path as ObjectPath, ObjectStore as ObjectStoreBackend, PutPayload, RetryConfig,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::error::describe;
use crate::domain::{
    errors::{StorageError, StorageResult},
    value_objects::{BucketName, ObjectKey},
};

/// Retry policy for remote backends: every transfer is one request and the
/// first failure is returned to the caller.
pub(crate) fn single_attempt() -> RetryConfig {
    RetryConfig {
        max_retries: 0,
        ..Default::default()
    }
}

/// One bucket of an object_store backend.
///
/// Every `Storage` adapter delegates its transfers here; the adapters only
/// differ in how the backend is built and authenticated.
#[derive(Clone)]
pub(crate) struct ObjectStoreBucket {
    store: Arc<dyn ObjectStoreBackend>,
    bucket: BucketName,
}

impl ObjectStoreBucket {
    pub(crate) fn new(store: Arc<dyn ObjectStoreBackend>, bucket: BucketName) -> Self {
        Self { store, bucket }
    }

    pub(crate) fn bucket(&self) -> &BucketName {
        &self.bucket
    }

    /// Convert ObjectKey to object_store Path.
    ///
    /// Keys are stored verbatim. A key the backend path would rewrite (empty
    /// segments, leading or trailing `/`, `.` or `..` segments, control
    /// characters) is rejected.
    fn to_object_path(key: &ObjectKey) -> Result<ObjectPath, String> {
        let path = ObjectPath::parse(key.as_str())
            .map_err(|e| format!("object key cannot be stored verbatim: {}", e))?;
        if path.as_ref() != key.as_str() {
            return Err(format!(
                "object key cannot be stored verbatim: would become '{}'",
                path
            ));
        }
        Ok(path)
    }

    pub(crate) async fn upload_file(
        &self,
        file_path: &Path,
        key: &ObjectKey,
    ) -> StorageResult<ObjectKey> {
        let path = Self::to_object_path(key)
            .map_err(|reason| StorageError::write(&self.bucket, key, reason))?;
        let data = tokio::fs::read(file_path).await.map_err(|e| {
            StorageError::write(
                &self.bucket,
                key,
                format!("cannot read local file {}: {}", file_path.display(), e),
            )
        })?;
        let size = data.len();

        self.store
            .put(&path, PutPayload::from(data))
            .await
            .map_err(|e| StorageError::write(&self.bucket, key, describe(&e)))?;

        debug!(bucket = %self.bucket, key = %key, size, "Uploaded object");
        Ok(key.clone())
    }

    pub(crate) async fn download_file(
        &self,
        key: &ObjectKey,
        dest_dir: &Path,
    ) -> StorageResult<PathBuf> {
        let file_name = key.file_name();
        if matches!(file_name, "" | "." | "..") {
            return Err(StorageError::read(
                &self.bucket,
                key,
                "object key has no usable file name",
            ));
        }
        let path = Self::to_object_path(key)
            .map_err(|reason| StorageError::read(&self.bucket, key, reason))?;
        let dest = dest_dir.join(file_name);

        let result = self
            .store
            .get(&path)
            .await
            .map_err(|e| StorageError::read(&self.bucket, key, describe(&e)))?;
        let bytes = result
            .bytes()
            .await
            .map_err(|e| StorageError::read(&self.bucket, key, describe(&e)))?;

        tokio::fs::write(&dest, &bytes).await.map_err(|e| {
            StorageError::read(
                &self.bucket,
                key,
                format!("cannot write {}: {}", dest.display(), e),
            )
        })?;

        debug!(bucket = %self.bucket, key = %key, size = bytes.len(), path = %dest.display(), "Downloaded object");
        Ok(dest)
    }
}
