use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serverless_batch::{
    adapters::inbound::lambda::{handle_html_to_pdf, handle_make_report},
    app::{
        build_storage, non_empty, ConversionStepConfig, ConverterConfig, ReportStepConfig,
        RepositoryConfig, StorageBackend,
    },
    logging::init_logging,
    BucketName, ObjectKey, ObjectReference, StorageConfig,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ssb-cli")]
#[command(about = "Run the serverless batch steps locally", long_about = None)]
struct Cli {
    /// Endpoint of an S3-compatible service (MinIO); the provider default when unset
    #[arg(long, env = "SSB_S3_ENDPOINT", global = true)]
    s3_endpoint: Option<String>,

    /// Access key for the S3-compatible service
    #[arg(long, env = "SSB_MINIO_USER", global = true)]
    minio_user: Option<String>,

    /// Secret key for the S3-compatible service
    #[arg(long, env = "SSB_MINIO_PASSWORD", global = true, hide_env_values = true)]
    minio_password: Option<String>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the daily report and upload it
    MakeReport {
        /// Output bucket
        #[arg(short, long, env = "SSB_BUCKET_NAME")]
        bucket: String,
        /// DynamoDB table holding the messages
        #[arg(short, long, env = "SSB_DYNAMODB_TABLE_NAME")]
        table: String,
        /// DynamoDB endpoint override
        #[arg(long, env = "SSB_DYNAMODB_ENDPOINT")]
        dynamodb_endpoint: Option<String>,
    },

    /// Convert an uploaded HTML report to PDF
    HtmlToPdf {
        /// Bucket holding the report
        #[arg(short, long, env = "SSB_BUCKET_NAME")]
        bucket: String,
        /// Object name of the HTML report
        object: String,
        /// Path of the wkhtmltopdf executable
        #[arg(long, env = "SSB_WKHTMLTOPDF_PATH")]
        wkhtmltopdf_path: Option<PathBuf>,
    },

    /// Upload a local file
    Upload {
        /// File path to upload
        file: PathBuf,
        /// Object key
        key: String,
        /// Bucket name
        #[arg(short, long, env = "SSB_BUCKET_NAME")]
        bucket: String,
    },

    /// Download an object into a directory
    Download {
        /// Object key
        key: String,
        /// Destination directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
        /// Bucket name
        #[arg(short, long, env = "SSB_BUCKET_NAME")]
        bucket: String,
    },
}

impl Cli {
    fn storage_config(&self) -> Result<StorageConfig> {
        Ok(StorageConfig::from_parts(
            self.s3_endpoint.clone(),
            self.minio_user.clone(),
            self.minio_password.clone(),
        )?)
    }
}

fn print_reference(reference: &ObjectReference) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reference)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_level, false);

    let storage = cli.storage_config()?;

    match &cli.command {
        Commands::MakeReport {
            bucket,
            table,
            dynamodb_endpoint,
        } => {
            let config = ReportStepConfig {
                bucket: BucketName::new(bucket.as_str())?,
                storage,
                repository: RepositoryConfig {
                    table_name: table.clone(),
                    endpoint: non_empty(dynamodb_endpoint.clone()),
                },
            };
            let reference = handle_make_report(&config)
                .await
                .context("Report step failed")?;
            print_reference(&reference)?;
        }
        Commands::HtmlToPdf {
            bucket,
            object,
            wkhtmltopdf_path,
        } => {
            let input = ObjectReference::new(
                BucketName::new(bucket.as_str())?,
                ObjectKey::new(object.as_str())?,
            );
            let config = ConversionStepConfig {
                storage,
                converter: ConverterConfig {
                    binary: wkhtmltopdf_path.clone(),
                },
            };
            let reference = handle_html_to_pdf(&input, &config)
                .await
                .context("Conversion step failed")?;
            print_reference(&reference)?;
        }
        Commands::Upload { file, key, bucket } => {
            let backend = StorageBackend::select(&storage, BucketName::new(bucket.as_str())?);
            let key = ObjectKey::new(key.as_str())?;
            let uploaded = build_storage(&backend)?
                .upload(file, &key)
                .await
                .with_context(|| format!("Failed to upload {}", file.display()))?;
            print_reference(&ObjectReference::new(backend.bucket().clone(), uploaded))?;
        }
        Commands::Download { key, dir, bucket } => {
            let backend = StorageBackend::select(&storage, BucketName::new(bucket.as_str())?);
            let key = ObjectKey::new(key.as_str())?;
            let path = build_storage(&backend)?
                .download(&key, dir)
                .await
                .with_context(|| format!("Failed to download {}", key))?;
            info!(path = %path.display(), "Download complete");
            println!("{}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "ssb-cli",
            "html-to-pdf",
            "--bucket",
            "reports",
            "2021_11_28.html",
            "--s3-endpoint",
            "http://localhost:9000",
            "--minio-user",
            "minioadmin",
            "--minio-password",
            "minioadmin",
        ]);

        assert_eq!(cli.s3_endpoint.as_deref(), Some("http://localhost:9000"));
        match cli.command {
            Commands::HtmlToPdf { bucket, object, .. } => {
                assert_eq!(bucket, "reports");
                assert_eq!(object, "2021_11_28.html");
            }
            other => panic!("Expected html-to-pdf, got {:?}", other),
        }
    }

    #[test]
    fn test_storage_config_from_flags() {
        let cli = Cli::parse_from([
            "ssb-cli",
            "--s3-endpoint",
            "http://localhost:9000",
            "--minio-user",
            "minioadmin",
            "--minio-password",
            "secret",
            "download",
            "2021_11_28.pdf",
            "--bucket",
            "reports",
        ]);

        let config = cli.storage_config().unwrap();
        let backend = StorageBackend::select(&config, BucketName::new("reports").unwrap());
        assert!(matches!(backend, StorageBackend::Compatible { .. }));
    }
}
