use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BucketName, ObjectKey};

/// Identifies an artifact in object storage.
///
/// This is the payload exchanged with the orchestrator between steps, so it
/// keeps the orchestrator's field names on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectReference {
    #[serde(rename = "BucketName")]
    pub bucket: BucketName,
    #[serde(rename = "ObjectName")]
    pub key: ObjectKey,
}

impl ObjectReference {
    pub fn new(bucket: BucketName, key: ObjectKey) -> Self {
        Self { bucket, key }
    }
}
