mod common;

use axum::http::{Method, StatusCode};
use common::{bucket, key, StubEndpoint};
use serverless_batch::{MinioStorage, StaticCredentials, Storage, StorageError};

async fn failing_minio() -> (StubEndpoint, MinioStorage) {
    let endpoint = StubEndpoint::start(StatusCode::INTERNAL_SERVER_ERROR, "text/plain", "").await;
    let credentials = StaticCredentials::new("minioadmin", "minioadmin");
    let storage = MinioStorage::new(bucket(), &endpoint.url, Some(&credentials)).unwrap();
    (endpoint, storage)
}

#[tokio::test]
async fn failed_upload_is_sent_once() {
    let (endpoint, storage) = failing_minio().await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("2021_11_28.html");
    std::fs::write(&file, "<p>hello</p>").unwrap();

    let result = storage.upload(&file, &key("2021_11_28.html")).await;

    assert!(matches!(result, Err(StorageError::Write { .. })));
    let requests = endpoint.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].uri.path(), "/b/2021_11_28.html");
    assert_eq!(&requests[0].body[..], b"<p>hello</p>");
}

#[tokio::test]
async fn failed_download_is_sent_once() {
    let (endpoint, storage) = failing_minio().await;
    let dir = tempfile::tempdir().unwrap();

    let result = storage.download(&key("2021_11_28.html"), dir.path()).await;

    assert!(matches!(result, Err(StorageError::Read { .. })));
    assert_eq!(endpoint.requests().len(), 1);
    assert!(!dir.path().join("2021_11_28.html").exists());
}

#[tokio::test]
async fn rewritten_key_never_reaches_the_backend() {
    let (endpoint, storage) = failing_minio().await;
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("b.html");
    std::fs::write(&file, "<p>hello</p>").unwrap();

    let result = storage.upload(&file, &key("a//b.html")).await;

    assert!(matches!(result, Err(StorageError::Write { .. })));
    assert!(endpoint.requests().is_empty());
}
