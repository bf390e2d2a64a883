use async_trait::async_trait;
use std::path::Path;

use crate::domain::{errors::StepResult, value_objects::ObjectKey};

/// Port for the HTML-to-PDF conversion step
#[async_trait]
pub trait ConversionService: Send + Sync + 'static {
    /// Download `html_key` into `out_dir`, convert it and upload the PDF.
    /// Returns the key of the uploaded PDF.
    async fn html_to_pdf(&self, html_key: &ObjectKey, out_dir: &Path) -> StepResult<ObjectKey>;
}
