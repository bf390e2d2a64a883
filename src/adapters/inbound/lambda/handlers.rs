use chrono::NaiveDate;
use tempfile::TempDir;
use tracing::{info, instrument};

use crate::{
    app::{
        build_converter, build_repository, build_storage, AppError, ConversionStepConfig,
        ReportStepConfig, StorageBackend,
    },
    domain::{
        errors::{StepError, StepResult},
        models::ObjectReference,
        value_objects::BucketName,
    },
    ports::services::{ConversionService, ReportService},
    services::{report_target_date, ConversionServiceImpl, ReportServiceImpl},
};

/// Errors surfaced to the orchestrator by a step invocation
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Step(#[from] StepError),
}

/// Exclusively owned working directory, deleted on drop
fn scoped_workdir() -> StepResult<TempDir> {
    tempfile::Builder::new()
        .prefix("ssb-")
        .tempdir()
        .map_err(|source| StepError::LocalFile {
            path: std::env::temp_dir(),
            source,
        })
}

/// Run the report step for `target_date` and reference its output in `bucket`
pub async fn run_report_step(
    service: &dyn ReportService,
    bucket: &BucketName,
    target_date: NaiveDate,
) -> StepResult<ObjectReference> {
    let workdir = scoped_workdir()?;
    let key = service.make_report(target_date, workdir.path()).await?;

    Ok(ObjectReference::new(bucket.clone(), key))
}

/// Run the conversion step on the object referenced by `input`
pub async fn run_conversion_step(
    service: &dyn ConversionService,
    input: &ObjectReference,
) -> StepResult<ObjectReference> {
    let workdir = scoped_workdir()?;
    let key = service.html_to_pdf(&input.key, workdir.path()).await?;

    Ok(ObjectReference::new(input.bucket.clone(), key))
}

/// Report step wired to the configured DynamoDB table and object store
#[instrument(skip_all, fields(bucket = %config.bucket))]
pub async fn handle_make_report(
    config: &ReportStepConfig,
) -> Result<ObjectReference, HandlerError> {
    let backend = config.storage_backend();
    info!(compatible = matches!(backend, StorageBackend::Compatible { .. }), table = %config.repository.table_name, "Starting report step");

    let storage = build_storage(&backend)?;
    let repository = build_repository(&config.repository).await;
    let service = ReportServiceImpl::new(repository, storage);

    Ok(run_report_step(&service, &config.bucket, report_target_date()).await?)
}

/// Conversion step wired to the configured object store and converter
#[instrument(skip_all, fields(bucket = %input.bucket, key = %input.key))]
pub async fn handle_html_to_pdf(
    input: &ObjectReference,
    config: &ConversionStepConfig,
) -> Result<ObjectReference, HandlerError> {
    let backend = StorageBackend::select(&config.storage, input.bucket.clone());
    info!(compatible = matches!(backend, StorageBackend::Compatible { .. }), "Starting conversion step");

    let storage = build_storage(&backend)?;
    let converter = build_converter(&config.converter);
    let service = ConversionServiceImpl::new(storage, converter);

    Ok(run_conversion_step(&service, input).await?)
}
