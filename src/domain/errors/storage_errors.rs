use crate::domain::value_objects::{BucketName, ObjectKey};

/// Errors that can occur while moving files in and out of object storage
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Fetching the object or writing it to local disk failed
    Read {
        bucket: BucketName,
        key: ObjectKey,
        reason: String,
    },

    /// Reading the local file or storing the object failed
    Write {
        bucket: BucketName,
        key: ObjectKey,
        reason: String,
    },
}

impl StorageError {
    pub fn read(bucket: &BucketName, key: &ObjectKey, reason: impl std::fmt::Display) -> Self {
        StorageError::Read {
            bucket: bucket.clone(),
            key: key.clone(),
            reason: reason.to_string(),
        }
    }

    pub fn write(bucket: &BucketName, key: &ObjectKey, reason: impl std::fmt::Display) -> Self {
        StorageError::Write {
            bucket: bucket.clone(),
            key: key.clone(),
            reason: reason.to_string(),
        }
    }

    /// Key of the object the failed operation was addressing
    pub fn key(&self) -> &ObjectKey {
        match self {
            StorageError::Read { key, .. } | StorageError::Write { key, .. } => key,
        }
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Read {
                bucket,
                key,
                reason,
            } => {
                write!(
                    f,
                    "Failed to read object '{}' from bucket '{}': {}",
                    key, bucket, reason
                )
            }
            StorageError::Write {
                bucket,
                key,
                reason,
            } => {
                write!(
                    f,
                    "Failed to write object '{}' to bucket '{}': {}",
                    key, bucket, reason
                )
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
