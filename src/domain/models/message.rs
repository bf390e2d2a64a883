use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format of the partition key messages are stored under, e.g. `2021/11/28`.
pub const MESSAGE_KEY_FORMAT: &str = "%Y/%m/%d";

/// The message published for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub date: NaiveDate,
    pub text: String,
}

impl Message {
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            date,
            text: text.into(),
        }
    }

    /// Partition key the message for `date` is stored under
    pub fn key_for(date: NaiveDate) -> String {
        date.format(MESSAGE_KEY_FORMAT).to_string()
    }
}
