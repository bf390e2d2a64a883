//! Storage adapter for self-hosted S3-compatible services such as MinIO.

pub mod minio_adapter;

pub use minio_adapter::{MinioStorage, DEFAULT_REGION};
