use async_trait::async_trait;
use serde_json::Value;

/// Well-known key holding the whole portfolio record.
pub const PORTFOLIO_KEY: &str = "portfolio_data";

/// Well-known key holding the contact message list.
pub const CONTACT_MESSAGES_KEY: &str = "contact_messages";

/// Outgoing port for document persistence.
///
/// The service keeps exactly two documents (the portfolio record and the
/// contact message list), each stored wholesale under one key. Writes
/// replace the previous value unconditionally; there is no merge and no
/// conflict detection. Last writer wins.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, KvStoreError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), KvStoreError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum KvStoreError {
    #[error("Storage error: {0}")]
    StorageError(String),
}
