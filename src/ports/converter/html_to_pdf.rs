use async_trait::async_trait;
use std::path::Path;

use crate::domain::errors::ConversionResult;

/// Header text printed on every page of a report PDF.
pub const REPORT_HEADER_RIGHT: &str = "Simple Serverless Batch";

/// Footer printed on every page of a report PDF ("3/7").
pub const REPORT_FOOTER_RIGHT: &str = "[page]/[topage]";

/// Rendering options handed to the converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfOptions {
    /// Let the document pull in images and stylesheets from local paths
    pub enable_local_file_access: bool,
    pub header_right: Option<String>,
    pub footer_right: Option<String>,
}

impl PdfOptions {
    /// Options every report PDF is rendered with
    pub fn report() -> Self {
        Self {
            enable_local_file_access: true,
            header_right: Some(REPORT_HEADER_RIGHT.to_string()),
            footer_right: Some(REPORT_FOOTER_RIGHT.to_string()),
        }
    }
}

/// Port for the external HTML-to-PDF renderer
#[async_trait]
pub trait HtmlToPdfConverter: Send + Sync + 'static {
    /// Render `html_path` into `pdf_path`.
    ///
    /// On success `pdf_path` exists; on failure nothing may be assumed about it.
    async fn convert(
        &self,
        html_path: &Path,
        pdf_path: &Path,
        options: &PdfOptions,
    ) -> ConversionResult<()>;
}
