use async_trait::async_trait;
use aws_config::{retry::RetryConfig, BehaviorVersion, SdkConfig};
use aws_sdk_dynamodb::{error::DisplayErrorContext, types::AttributeValue, Client};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, error};

use crate::{
    domain::{
        errors::{RepositoryError, RepositoryResult},
        models::Message,
    },
    ports::repositories::MessageRepository,
};

/// Partition key attribute, holding the date as `YYYY/MM/DD`
pub const PARTITION_KEY: &str = "Date";

/// Attribute holding the message text
pub const MESSAGE_ATTRIBUTE: &str = "Message";

/// DynamoDB-backed implementation of MessageRepository
#[derive(Clone)]
pub struct DynamoDbMessageRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbMessageRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Build a client from the runtime's AWS configuration, optionally
    /// pointed at another endpoint (DynamoDB Local, for instance).
    pub async fn connect(table_name: impl Into<String>, endpoint: Option<&str>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());
        if let Some(endpoint) = endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let config = loader.load().await;

        Self::from_sdk_config(&config, table_name)
    }

    /// Build a client from shared AWS configuration. Requests are sent once;
    /// whatever retry mode `config` carries is overridden.
    pub fn from_sdk_config(config: &SdkConfig, table_name: impl Into<String>) -> Self {
        let client_config = aws_sdk_dynamodb::config::Builder::from(config)
            .retry_config(RetryConfig::disabled())
            .build();

        Self::new(Client::from_conf(client_config), table_name)
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl MessageRepository for DynamoDbMessageRepository {
    async fn get_message(&self, target_date: NaiveDate) -> RepositoryResult<Option<Message>> {
        let key = Message::key_for(target_date);

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(PARTITION_KEY, AttributeValue::S(key.clone()))
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                error!(table = %self.table_name, key = %key, error = %message, "GetItem failed");
                RepositoryError::Access {
                    table: self.table_name.clone(),
                    message,
                }
            })?;

        match output.item() {
            Some(item) => message_from_item(target_date, &key, item).map(Some),
            None => {
                debug!(table = %self.table_name, key = %key, "No message stored");
                Ok(None)
            }
        }
    }
}

/// Turn a fetched item into a Message
fn message_from_item(
    date: NaiveDate,
    key: &str,
    item: &HashMap<String, AttributeValue>,
) -> RepositoryResult<Message> {
    let value = item
        .get(MESSAGE_ATTRIBUTE)
        .ok_or_else(|| RepositoryError::MalformedRecord {
            key: key.to_string(),
            message: format!("missing attribute '{}'", MESSAGE_ATTRIBUTE),
        })?;

    let text = value
        .as_s()
        .map_err(|_| RepositoryError::MalformedRecord {
            key: key.to_string(),
            message: format!("attribute '{}' is not a string", MESSAGE_ATTRIBUTE),
        })?;

    Ok(Message::new(date, text.clone()))
}
