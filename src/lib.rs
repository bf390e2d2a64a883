pub mod adapters;
pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    BucketName,
    // Errors
    ConversionError,
    DomainValidationError,
    // Models
    Message,
    ObjectKey,
    ObjectReference,
    RepositoryError,
    StaticCredentials,
    StepError,
    StorageConfig,
    StorageError,
};

// Port types - interfaces for external systems
pub use ports::{
    ConversionService, HtmlToPdfConverter, MessageRepository, PdfOptions, ReportService, Storage,
};

// Service implementations - business logic
pub use services::{report_target_date, ConversionServiceImpl, ReportServiceImpl};

// Application factory and configuration
pub use app::{
    build_converter, build_repository, build_storage, AppError, ConversionStepConfig,
    ConverterConfig, ReportStepConfig, RepositoryConfig, StorageBackend,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    converter::WkhtmltopdfConverter,
    persistence::{DynamoDbMessageRepository, InMemoryMessageRepository},
    storage::{InMemoryStorage, MinioStorage, S3Storage},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        BucketName, ConversionService, ConversionServiceImpl, InMemoryMessageRepository,
        InMemoryStorage, MessageRepository, MinioStorage, ObjectKey, ObjectReference,
        ReportService, ReportServiceImpl, S3Storage, Storage, StorageBackend,
    };
}
