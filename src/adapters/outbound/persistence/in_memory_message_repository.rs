use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    domain::{errors::RepositoryResult, models::Message},
    ports::repositories::MessageRepository,
};

/// In-memory implementation of MessageRepository for testing and development
#[derive(Clone, Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<HashMap<NaiveDate, String>>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `text` as the message for `date`, replacing any previous one
    pub async fn insert(&self, date: NaiveDate, text: impl Into<String>) {
        self.messages.write().await.insert(date, text.into());
    }

    pub async fn remove(&self, date: NaiveDate) -> Option<String> {
        self.messages.write().await.remove(&date)
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn get_message(&self, target_date: NaiveDate) -> RepositoryResult<Option<Message>> {
        let messages = self.messages.read().await;

        Ok(messages
            .get(&target_date)
            .map(|text| Message::new(target_date, text.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_stored_message() {
        let repository = InMemoryMessageRepository::new();
        let date = NaiveDate::from_ymd_opt(2021, 11, 28).unwrap();
        repository.insert(date, "Hello, world!!").await;

        let message = repository.get_message(date).await.unwrap().unwrap();

        assert_eq!(message, Message::new(date, "Hello, world!!"));
    }

    #[tokio::test]
    async fn test_missing_message_is_none() {
        let repository = InMemoryMessageRepository::new();
        let date = NaiveDate::from_ymd_opt(2021, 11, 28).unwrap();
        repository.insert(date, "Hello, world!!").await;
        repository.remove(date).await;

        assert!(repository.get_message(date).await.unwrap().is_none());
    }
}
