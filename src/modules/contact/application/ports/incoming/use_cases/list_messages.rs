use async_trait::async_trait;

use crate::contact::domain::entities::ContactMessage;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMessagesError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Return every stored message in storage order (oldest first). The
/// caller reverses for newest-first display if it wants to.
#[async_trait]
pub trait ListMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListMessagesError>;
}
