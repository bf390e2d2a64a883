use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::Path;

use crate::domain::{errors::StepResult, value_objects::ObjectKey};

/// Port for the report generation step
#[async_trait]
pub trait ReportService: Send + Sync + 'static {
    /// Render the report for `target_date` into `out_dir`, upload it and
    /// return its object key.
    async fn make_report(&self, target_date: NaiveDate, out_dir: &Path) -> StepResult<ObjectKey>;
}
