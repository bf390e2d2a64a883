use thiserror::Error as ThisError;

/// Errors raised while constructing a storage backend
#[derive(ThisError, Debug)]
pub enum StoreError {
    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("Invalid storage configuration: {0}")]
    Configuration(String),
}

/// Short, stable description of an object_store failure for storage errors.
///
/// The variants callers act on (missing object, rejected credentials) are
/// spelled out; everything else keeps the backend's own message.
pub(crate) fn describe(err: &object_store::Error) -> String {
    match err {
        object_store::Error::NotFound { path, .. } => format!("object not found: {}", path),
        object_store::Error::PermissionDenied { path, source } => {
            format!("permission denied for {}: {}", path, source)
        }
        object_store::Error::Unauthenticated { path, source } => {
            format!("unauthenticated request for {}: {}", path, source)
        }
        _ => err.to_string(),
    }
}
