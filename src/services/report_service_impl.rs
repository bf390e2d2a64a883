use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    domain::{
        errors::{StepError, StepResult},
        models::{render_report, report_object_key},
        value_objects::ObjectKey,
    },
    ports::{repositories::MessageRepository, services::ReportService, storage::Storage},
};

/// Date every report run is generated for.
pub const REPORT_TARGET_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2021, 11, 28) {
    Some(date) => date,
    None => panic!("invalid report target date"),
};

/// Date the report step renders. Runs are not parameterized by the
/// orchestrator input; every run targets the same day.
pub fn report_target_date() -> NaiveDate {
    REPORT_TARGET_DATE
}

/// Implementation of ReportService: repository -> template -> storage
#[derive(Clone)]
pub struct ReportServiceImpl {
    repository: Arc<dyn MessageRepository>,
    storage: Arc<dyn Storage>,
}

impl ReportServiceImpl {
    pub fn new(repository: Arc<dyn MessageRepository>, storage: Arc<dyn Storage>) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

#[async_trait]
impl ReportService for ReportServiceImpl {
    async fn make_report(&self, target_date: NaiveDate, out_dir: &Path) -> StepResult<ObjectKey> {
        let message = self.repository.get_message(target_date).await?;
        if message.is_none() {
            warn!(date = %target_date, "No message stored, rendering an empty report");
        }

        let html = render_report(message.as_ref());

        let key = report_object_key(target_date, ".html")?;
        let html_path = out_dir.join(key.file_name());
        tokio::fs::write(&html_path, html)
            .await
            .map_err(|source| StepError::LocalFile {
                path: html_path.clone(),
                source,
            })?;

        let key = self.storage.upload(&html_path, &key).await?;

        info!(date = %target_date, key = %key, "Report uploaded");
        Ok(key)
    }
}
