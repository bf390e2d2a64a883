use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, error};

use crate::{
    domain::errors::{ConversionError, ConversionResult},
    ports::converter::{HtmlToPdfConverter, PdfOptions},
};

/// Program looked up on `PATH` when no converter path is configured
pub const DEFAULT_BINARY: &str = "wkhtmltopdf";

/// Converter shelling out to the `wkhtmltopdf` command line tool
#[derive(Debug, Clone)]
pub struct WkhtmltopdfConverter {
    binary: PathBuf,
}

impl WkhtmltopdfConverter {
    pub fn new(binary: Option<PathBuf>) -> Self {
        Self {
            binary: binary.unwrap_or_else(|| PathBuf::from(DEFAULT_BINARY)),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    fn command_args(html_path: &Path, pdf_path: &Path, options: &PdfOptions) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["--quiet".into()];

        if options.enable_local_file_access {
            args.push("--enable-local-file-access".into());
        }
        if let Some(header) = &options.header_right {
            args.push("--header-right".into());
            args.push(header.into());
        }
        if let Some(footer) = &options.footer_right {
            args.push("--footer-right".into());
            args.push(footer.into());
        }

        args.push(html_path.into());
        args.push(pdf_path.into());
        args
    }
}

impl Default for WkhtmltopdfConverter {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl HtmlToPdfConverter for WkhtmltopdfConverter {
    async fn convert(
        &self,
        html_path: &Path,
        pdf_path: &Path,
        options: &PdfOptions,
    ) -> ConversionResult<()> {
        let args = Self::command_args(html_path, pdf_path, options);
        debug!(program = %self.binary.display(), ?args, "Running converter");

        let output = Command::new(&self.binary)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ConversionError::Spawn {
                program: self.binary.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(program = %self.binary.display(), status = ?output.status.code(), %stderr, "Converter failed");
            return Err(ConversionError::Failed {
                program: self.binary.clone(),
                status: output.status.code(),
                stderr,
            });
        }

        if !tokio::fs::try_exists(pdf_path).await.unwrap_or(false) {
            return Err(ConversionError::MissingOutput {
                path: pdf_path.to_path_buf(),
            });
        }

        Ok(())
    }
}
