#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use chrono::NaiveDate;
use serverless_batch::{
    domain::errors::{
        ConversionError, ConversionResult, RepositoryError, RepositoryResult, StorageResult,
    },
    BucketName, HtmlToPdfConverter, InMemoryStorage, Message, MessageRepository, ObjectKey,
    PdfOptions, Storage,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub const HELLO: &str = "Hello, world!!";

pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 11, 28).unwrap()
}

pub fn bucket() -> BucketName {
    BucketName::new("b").unwrap()
}

pub fn key(value: &str) -> ObjectKey {
    ObjectKey::new(value).unwrap()
}

/// Fetch `key` from `storage` and return its contents
pub async fn read_object(storage: &InMemoryStorage, key: &ObjectKey) -> Vec<u8> {
    let dir = tempfile::tempdir().unwrap();
    let path = storage.download(key, dir.path()).await.unwrap();
    std::fs::read(path).unwrap()
}

/// Whether `key` exists in `storage`
pub async fn object_exists(storage: &InMemoryStorage, key: &ObjectKey) -> bool {
    let dir = tempfile::tempdir().unwrap();
    storage.download(key, dir.path()).await.is_ok()
}

/// Repository whose table is unavailable
pub struct FailingRepository;

#[async_trait]
impl MessageRepository for FailingRepository {
    async fn get_message(&self, _target_date: NaiveDate) -> RepositoryResult<Option<Message>> {
        Err(RepositoryError::Access {
            table: "Messages".to_string(),
            message: "ProvisionedThroughputExceededException".to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ConversionCall {
    pub html_path: PathBuf,
    pub pdf_path: PathBuf,
    pub html: String,
    pub options: PdfOptions,
}

/// Converter writing a stub PDF and remembering every call
#[derive(Clone, Default)]
pub struct RecordingConverter {
    calls: Arc<Mutex<Vec<ConversionCall>>>,
}

pub const FAKE_PDF: &[u8] = b"%PDF-1.4\n%stub\n";

impl RecordingConverter {
    pub fn calls(&self) -> Vec<ConversionCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HtmlToPdfConverter for RecordingConverter {
    async fn convert(
        &self,
        html_path: &Path,
        pdf_path: &Path,
        options: &PdfOptions,
    ) -> ConversionResult<()> {
        let html = tokio::fs::read_to_string(html_path).await.unwrap();
        tokio::fs::write(pdf_path, FAKE_PDF).await.unwrap();

        self.calls.lock().unwrap().push(ConversionCall {
            html_path: html_path.to_path_buf(),
            pdf_path: pdf_path.to_path_buf(),
            html,
            options: options.clone(),
        });
        Ok(())
    }
}

/// Converter rejecting every document, the way wkhtmltopdf does on
/// unreadable input
pub struct FailingConverter;

#[async_trait]
impl HtmlToPdfConverter for FailingConverter {
    async fn convert(
        &self,
        _html_path: &Path,
        _pdf_path: &Path,
        _options: &PdfOptions,
    ) -> ConversionResult<()> {
        Err(ConversionError::Failed {
            program: PathBuf::from("wkhtmltopdf"),
            status: Some(1),
            stderr: "Failed to load document".to_string(),
        })
    }
}

/// Storage wrapper remembering which keys were uploaded and downloaded
#[derive(Clone)]
pub struct RecordingStorage {
    inner: InMemoryStorage,
    uploads: Arc<Mutex<Vec<ObjectKey>>>,
    downloads: Arc<Mutex<Vec<ObjectKey>>>,
}

impl RecordingStorage {
    pub fn new(inner: InMemoryStorage) -> Self {
        Self {
            inner,
            uploads: Arc::default(),
            downloads: Arc::default(),
        }
    }

    pub fn uploads(&self) -> Vec<ObjectKey> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn downloads(&self) -> Vec<ObjectKey> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn upload(&self, file_path: &Path, key: &ObjectKey) -> StorageResult<ObjectKey> {
        self.uploads.lock().unwrap().push(key.clone());
        self.inner.upload(file_path, key).await
    }

    async fn download(&self, key: &ObjectKey, dest_dir: &Path) -> StorageResult<PathBuf> {
        self.downloads.lock().unwrap().push(key.clone());
        self.inner.download(key, dest_dir).await
    }
}

#[derive(Debug, Clone)]
pub struct StubRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    requests: Arc<Mutex<Vec<StubRequest>>>,
}

/// Local HTTP endpoint answering every request with one canned response
pub struct StubEndpoint {
    pub url: String,
    requests: Arc<Mutex<Vec<StubRequest>>>,
}

impl StubEndpoint {
    pub async fn start(status: StatusCode, content_type: &'static str, body: &str) -> Self {
        let requests: Arc<Mutex<Vec<StubRequest>>> = Arc::default();
        let state = StubState {
            status,
            content_type,
            body: body.to_string(),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { url, requests }
    }

    pub fn requests(&self) -> Vec<StubRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn respond(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(StubRequest {
        method,
        uri,
        headers,
        body,
    });

    (
        state.status,
        [(header::CONTENT_TYPE, state.content_type)],
        state.body,
    )
        .into_response()
}
