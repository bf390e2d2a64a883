use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::{
    domain::{errors::StepResult, value_objects::ObjectKey},
    ports::{
        converter::{HtmlToPdfConverter, PdfOptions},
        services::ConversionService,
        storage::Storage,
    },
};

/// Implementation of ConversionService: storage -> converter -> storage
#[derive(Clone)]
pub struct ConversionServiceImpl {
    storage: Arc<dyn Storage>,
    converter: Arc<dyn HtmlToPdfConverter>,
    options: PdfOptions,
}

impl ConversionServiceImpl {
    pub fn new(storage: Arc<dyn Storage>, converter: Arc<dyn HtmlToPdfConverter>) -> Self {
        Self {
            storage,
            converter,
            options: PdfOptions::report(),
        }
    }

    pub fn options(&self) -> &PdfOptions {
        &self.options
    }
}

#[async_trait]
impl ConversionService for ConversionServiceImpl {
    async fn html_to_pdf(&self, html_key: &ObjectKey, out_dir: &Path) -> StepResult<ObjectKey> {
        let html_path = self.storage.download(html_key, out_dir).await?;

        let pdf_key = ObjectKey::new(format!("{}.pdf", html_key.file_stem()))?;
        let pdf_path = out_dir.join(pdf_key.as_str());

        // A failed conversion returns here, before anything is uploaded
        self.converter
            .convert(&html_path, &pdf_path, &self.options)
            .await?;

        let pdf_key = self.storage.upload(&pdf_path, &pdf_key).await?;

        info!(source = %html_key, key = %pdf_key, "PDF uploaded");
        Ok(pdf_key)
    }
}
