use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::{errors::StorageResult, value_objects::ObjectKey};

/// Port for moving files between the local disk and a bucket.
/// Each call is a single request against the backend; nothing is cached or
/// retried.
#[async_trait]
pub trait Storage: Send + Sync + 'static {
    /// Upload the file at `file_path` under `key`.
    ///
    /// Returns `key` unchanged; it is the caller's reference to the object.
    async fn upload(&self, file_path: &Path, key: &ObjectKey) -> StorageResult<ObjectKey>;

    /// Download `key` into `dest_dir`, naming the file after the key's
    /// basename. Returns the path of the written file.
    async fn download(&self, key: &ObjectKey, dest_dir: &Path) -> StorageResult<PathBuf>;
}
