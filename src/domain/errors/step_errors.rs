use super::{ConversionError, RepositoryError, StorageError, ValidationError};

/// Failure of a pipeline step. The first failing call aborts the step and is
/// surfaced unchanged to the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("Invalid identifier: {0}")]
    Validation(#[from] ValidationError),

    #[error("Local file error at {path}: {source}")]
    LocalFile {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for pipeline steps
pub type StepResult<T> = Result<T, StepError>;
