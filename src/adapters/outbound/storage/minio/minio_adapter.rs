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
        models::StaticCredentials,
        value_objects::{BucketName, ObjectKey},
    },
    ports::storage::Storage,
};

/// Region used to sign requests; MinIO accepts any region unless configured
/// otherwise.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Storage adapter for an S3-compatible endpoint with static credentials
#[derive(Clone)]
pub struct MinioStorage {
    inner: ObjectStoreBucket,
    endpoint: String,
}

impl MinioStorage {
    /// Connect to `bucket` on `endpoint`.
    ///
    /// Without `credentials` the runtime's ambient credentials sign the
    /// requests. Plain HTTP is allowed when the endpoint asks for it.
    pub fn new(
        bucket: BucketName,
        endpoint: &str,
        credentials: Option<&StaticCredentials>,
    ) -> Result<Self, StoreError> {
        if endpoint.is_empty() {
            return Err(StoreError::Configuration(
                "S3-compatible backend requires an endpoint".to_string(),
            ));
        }

        let builder = match credentials {
            Some(credentials) => AmazonS3Builder::new()
                .with_region(DEFAULT_REGION)
                .with_access_key_id(&credentials.access_key)
                .with_secret_access_key(&credentials.secret_key),
            None => AmazonS3Builder::from_env(),
        };

        let store = builder
            .with_bucket_name(bucket.as_str())
            .with_endpoint(endpoint)
            .with_virtual_hosted_style_request(false)
            .with_allow_http(endpoint.starts_with("http://"))
            .with_retry(single_attempt())
            .build()?;

        Ok(Self::with_store(Arc::new(store), bucket, endpoint))
    }

    /// Create an adapter over an already built backend
    pub fn with_store(
        store: Arc<dyn ObjectStoreBackend>,
        bucket: BucketName,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            inner: ObjectStoreBucket::new(store, bucket),
            endpoint: endpoint.into(),
        }
    }

    pub fn bucket(&self) -> &BucketName {
        self.inner.bucket()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Storage for MinioStorage {
    async fn upload(&self, file_path: &Path, key: &ObjectKey) -> StorageResult<ObjectKey> {
        self.inner.upload_file(file_path, key).await
    }

    async fn download(&self, key: &ObjectKey, dest_dir: &Path) -> StorageResult<PathBuf> {
        self.inner.download_file(key, dest_dir).await
    }
}
