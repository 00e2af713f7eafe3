use async_trait::async_trait;

use crate::contact::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase,
};
use crate::contact::domain::entities::ContactMessage;
use crate::shared::storage::{KvStore, CONTACT_MESSAGES_KEY};

#[derive(Debug, Clone)]
pub struct ListMessagesService<S>
where
    S: KvStore + Send + Sync,
{
    store: S,
}

impl<S> ListMessagesService<S>
where
    S: KvStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ListMessagesUseCase for ListMessagesService<S>
where
    S: KvStore + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListMessagesError> {
        let raw = self
            .store
            .get(CONTACT_MESSAGES_KEY)
            .await
            .map_err(|e| ListMessagesError::StorageError(e.to_string()))?;

        match raw {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| ListMessagesError::StorageError(e.to_string())),
            None => Ok(Vec::new()),
        }
    }
}
