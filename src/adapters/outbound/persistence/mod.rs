mod dynamodb_message_repository;
mod in_memory_message_repository;

pub use dynamodb_message_repository::{
    DynamoDbMessageRepository, MESSAGE_ATTRIBUTE, PARTITION_KEY,
};
pub use in_memory_message_repository::InMemoryMessageRepository;
