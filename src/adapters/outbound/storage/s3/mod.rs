//! Storage adapter for the provider's managed object store.
//!
//! Requests go to the default regional endpoint and are signed with whatever
//! credentials the runtime environment provides.

pub mod s3_adapter;

pub use s3_adapter::S3Storage;
