use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    adapters::outbound::{
        converter::WkhtmltopdfConverter,
        persistence::DynamoDbMessageRepository,
        storage::{MinioStorage, S3Storage, StoreError},
    },
    domain::{
        errors::ValidationError,
        models::{StaticCredentials, StorageConfig},
        value_objects::BucketName,
    },
    ports::{converter::HtmlToPdfConverter, repositories::MessageRepository, storage::Storage},
};

/// Output bucket of the report step
pub const ENV_BUCKET_NAME: &str = "SSB_BUCKET_NAME";
pub const ENV_DYNAMODB_TABLE_NAME: &str = "SSB_DYNAMODB_TABLE_NAME";
pub const ENV_DYNAMODB_ENDPOINT: &str = "SSB_DYNAMODB_ENDPOINT";
/// Endpoint of an S3-compatible service; selects the compatible backend
pub const ENV_S3_ENDPOINT: &str = "SSB_S3_ENDPOINT";
pub const ENV_MINIO_USER: &str = "SSB_MINIO_USER";
pub const ENV_MINIO_PASSWORD: &str = "SSB_MINIO_PASSWORD";
pub const ENV_WKHTMLTOPDF_PATH: &str = "SSB_WKHTMLTOPDF_PATH";

/// Treat empty settings the same as missing ones
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl StorageConfig {
    /// Build a storage configuration from raw settings.
    ///
    /// Empty values count as unset. A user without a password (or the other
    /// way round) is rejected rather than silently ignored.
    pub fn from_parts(
        endpoint: Option<String>,
        user: Option<String>,
        password: Option<String>,
    ) -> Result<Self, AppError> {
        let credentials = match (non_empty(user), non_empty(password)) {
            (Some(user), Some(password)) => Some(StaticCredentials::new(user, password)),
            (None, None) => None,
            _ => {
                return Err(AppError::Configuration {
                    message: format!(
                        "{} and {} must be set together",
                        ENV_MINIO_USER, ENV_MINIO_PASSWORD
                    ),
                })
            }
        };

        Ok(Self {
            endpoint: non_empty(endpoint),
            credentials,
        })
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        Self::from_parts(
            lookup(ENV_S3_ENDPOINT),
            lookup(ENV_MINIO_USER),
            lookup(ENV_MINIO_PASSWORD),
        )
    }
}

/// Storage backend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// The provider's object store with ambient credentials
    Default { bucket: BucketName },
    /// An S3-compatible service at an explicit endpoint
    Compatible {
        bucket: BucketName,
        endpoint: String,
        credentials: Option<StaticCredentials>,
    },
}

impl StorageBackend {
    /// Pick the backend for `bucket`. An endpoint override selects the
    /// compatible backend; anything else uses the default one.
    pub fn select(config: &StorageConfig, bucket: BucketName) -> Self {
        match config.endpoint.as_deref() {
            Some(endpoint) if !endpoint.is_empty() => StorageBackend::Compatible {
                bucket,
                endpoint: endpoint.to_string(),
                credentials: config.credentials.clone(),
            },
            _ => StorageBackend::Default { bucket },
        }
    }

    pub fn bucket(&self) -> &BucketName {
        match self {
            StorageBackend::Default { bucket } | StorageBackend::Compatible { bucket, .. } => bucket,
        }
    }
}

/// Create the storage adapter for a selected backend
pub fn build_storage(backend: &StorageBackend) -> Result<Arc<dyn Storage>, AppError> {
    let storage: Arc<dyn Storage> = match backend {
        StorageBackend::Default { bucket } => Arc::new(S3Storage::new(bucket.clone())?),
        StorageBackend::Compatible {
            bucket,
            endpoint,
            credentials,
        } => Arc::new(MinioStorage::new(
            bucket.clone(),
            endpoint,
            credentials.as_ref(),
        )?),
    };
    Ok(storage)
}

/// Repository backend configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub table_name: String,
    pub endpoint: Option<String>,
}

/// Create the message repository for a table
pub async fn build_repository(config: &RepositoryConfig) -> Arc<dyn MessageRepository> {
    Arc::new(
        DynamoDbMessageRepository::connect(config.table_name.clone(), config.endpoint.as_deref())
            .await,
    )
}

/// Converter configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Converter executable; `None` looks it up on `PATH`
    pub binary: Option<PathBuf>,
}

pub fn build_converter(config: &ConverterConfig) -> Arc<dyn HtmlToPdfConverter> {
    Arc::new(WkhtmltopdfConverter::new(config.binary.clone()))
}

/// Configuration of the report step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStepConfig {
    pub bucket: BucketName,
    pub storage: StorageConfig,
    pub repository: RepositoryConfig,
}

impl ReportStepConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let bucket = BucketName::new(required(&lookup, ENV_BUCKET_NAME)?)?;
        let table_name = required(&lookup, ENV_DYNAMODB_TABLE_NAME)?;

        Ok(Self {
            bucket,
            storage: StorageConfig::from_lookup(&lookup)?,
            repository: RepositoryConfig {
                table_name,
                endpoint: non_empty(lookup(ENV_DYNAMODB_ENDPOINT)),
            },
        })
    }

    pub fn storage_backend(&self) -> StorageBackend {
        StorageBackend::select(&self.storage, self.bucket.clone())
    }
}

/// Configuration of the conversion step. The bucket arrives with each event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStepConfig {
    pub storage: StorageConfig,
    pub converter: ConverterConfig,
}

impl ConversionStepConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        Ok(Self {
            storage: StorageConfig::from_lookup(&lookup)?,
            converter: ConverterConfig {
                binary: non_empty(lookup(ENV_WKHTMLTOPDF_PATH)).map(PathBuf::from),
            },
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, AppError> {
    non_empty(lookup(name)).ok_or_else(|| AppError::Configuration {
        message: format!("{} environment variable required", name),
    })
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration value: {0}")]
    InvalidValue(#[from] ValidationError),

    #[error("Storage initialization error: {0}")]
    StorageInit(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    fn bucket() -> BucketName {
        BucketName::new("reports").unwrap()
    }

    #[test]
    fn test_no_endpoint_selects_default_backend() {
        let backend = StorageBackend::select(&StorageConfig::default(), bucket());

        assert_eq!(backend, StorageBackend::Default { bucket: bucket() });
    }

    #[test]
    fn test_empty_endpoint_selects_default_backend() {
        let config = StorageConfig {
            endpoint: Some(String::new()),
            credentials: None,
        };

        assert!(matches!(
            StorageBackend::select(&config, bucket()),
            StorageBackend::Default { .. }
        ));
    }

    #[test]
    fn test_endpoint_selects_compatible_backend() {
        let credentials = StaticCredentials::new("minioadmin", "minioadmin");
        let config = StorageConfig {
            endpoint: Some("http://minio:9000".to_string()),
            credentials: Some(credentials.clone()),
        };

        assert_eq!(
            StorageBackend::select(&config, bucket()),
            StorageBackend::Compatible {
                bucket: bucket(),
                endpoint: "http://minio:9000".to_string(),
                credentials: Some(credentials),
            }
        );
    }

    #[test]
    fn test_from_parts_normalizes_empty_values() {
        let config = StorageConfig::from_parts(
            Some(String::new()),
            Some(String::new()),
            None,
        )
        .unwrap();

        assert_eq!(config, StorageConfig::default());
    }

    #[test]
    fn test_from_parts_rejects_half_a_credential_pair() {
        let result = StorageConfig::from_parts(
            Some("http://minio:9000".to_string()),
            Some("minioadmin".to_string()),
            None,
        );

        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }

    #[test]
    fn test_report_config_from_lookup() {
        let config = ReportStepConfig::from_lookup(lookup(&[
            (ENV_BUCKET_NAME, "reports"),
            (ENV_DYNAMODB_TABLE_NAME, "Messages"),
            (ENV_DYNAMODB_ENDPOINT, ""),
            (ENV_S3_ENDPOINT, "http://minio:9000"),
            (ENV_MINIO_USER, "minioadmin"),
            (ENV_MINIO_PASSWORD, "secret"),
        ]))
        .unwrap();

        assert_eq!(config.bucket, bucket());
        assert_eq!(config.repository.table_name, "Messages");
        assert_eq!(config.repository.endpoint, None);
        assert!(matches!(
            config.storage_backend(),
            StorageBackend::Compatible { ref endpoint, .. } if endpoint == "http://minio:9000"
        ));
    }

    #[test]
    fn test_report_config_requires_bucket() {
        let result = ReportStepConfig::from_lookup(lookup(&[
            (ENV_BUCKET_NAME, ""),
            (ENV_DYNAMODB_TABLE_NAME, "Messages"),
        ]));

        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }

    #[test]
    fn test_conversion_config_from_lookup() {
        let config = ConversionStepConfig::from_lookup(lookup(&[(
            ENV_WKHTMLTOPDF_PATH,
            "/opt/bin/wkhtmltopdf",
        )]))
        .unwrap();

        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(
            config.converter.binary,
            Some(PathBuf::from("/opt/bin/wkhtmltopdf"))
        );

        let config = ConversionStepConfig::from_lookup(lookup(&[(ENV_WKHTMLTOPDF_PATH, "")]))
            .unwrap();
        assert_eq!(config.converter.binary, None);
    }

    #[test]
    fn test_build_compatible_storage() {
        let backend = StorageBackend::Compatible {
            bucket: bucket(),
            endpoint: "http://localhost:9000".to_string(),
            credentials: Some(StaticCredentials::new("minioadmin", "minioadmin")),
        };

        assert!(build_storage(&backend).is_ok());
    }
}
