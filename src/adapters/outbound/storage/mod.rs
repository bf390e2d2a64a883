// Infrastructure error types
pub mod error;

// Shared transfer logic over object_store backends
mod object_bucket;

// Storage implementations
pub mod memory;

// Provider-specific implementations
pub mod minio;
pub mod s3;

// Re-export key types
pub use error::StoreError;
pub use memory::InMemoryStorage;
pub use minio::MinioStorage;
pub use s3::S3Storage;
