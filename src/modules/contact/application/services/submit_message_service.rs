use async_trait::async_trait;
use chrono::Utc;

use crate::contact::application::ports::incoming::use_cases::{
    SubmitMessageCommand, SubmitMessageError, SubmitMessageUseCase,
};
use crate::contact::domain::entities::ContactMessage;
use crate::shared::storage::{KvStore, CONTACT_MESSAGES_KEY};

/// Appends a message to the stored list.
///
/// The whole list is read, extended and written back, same as every other
/// document in the store. Identity is the submission instant in epoch
/// milliseconds.
#[derive(Debug, Clone)]
pub struct SubmitMessageService<S>
where
    S: KvStore + Send + Sync,
{
    store: S,
}

impl<S> SubmitMessageService<S>
where
    S: KvStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> SubmitMessageUseCase for SubmitMessageService<S>
where
    S: KvStore + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<ContactMessage, SubmitMessageError> {
        let raw = self
            .store
            .get(CONTACT_MESSAGES_KEY)
            .await
            .map_err(|e| SubmitMessageError::StorageError(e.to_string()))?;

        let mut messages: Vec<ContactMessage> = match raw {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| SubmitMessageError::StorageError(e.to_string()))?,
            None => Vec::new(),
        };

        let now = Utc::now();
        let message = ContactMessage {
            id: now.timestamp_millis(),
            name: command.name().to_string(),
            email: command.email().to_string(),
            message: command.message().to_string(),
            timestamp: now.to_rfc3339(),
        };

        messages.push(message.clone());

        let serialized = serde_json::to_value(&messages)
            .map_err(|e| SubmitMessageError::StorageError(e.to_string()))?;

        self.store
            .set(CONTACT_MESSAGES_KEY, serialized)
            .await
            .map_err(|e| SubmitMessageError::StorageError(e.to_string()))?;

        Ok(message)
    }
}
