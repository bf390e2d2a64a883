use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{errors::RepositoryResult, models::Message};

/// Repository for the daily messages reports are built from
#[async_trait]
pub trait MessageRepository: Send + Sync + 'static {
    /// Look up the message stored for `target_date`.
    ///
    /// `Ok(None)` means no record exists for that day. Failures of the
    /// lookup itself are errors and must never be reported as `None`.
    async fn get_message(&self, target_date: NaiveDate) -> RepositoryResult<Option<Message>>;
}
