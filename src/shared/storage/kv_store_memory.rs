use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::shared::storage::{KvStore, KvStoreError};

/// In-memory implementation of `KvStore`.
///
/// Used by unit tests in place of Postgres; clones share the same map, so a
/// service under test and its assertions observe the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryKvStore {
    entries: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, bypassing the trait.
    pub async fn seed(&self, key: &str, value: Value) {
        self.entries.write().await.insert(key.to_string(), value);
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, KvStoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), KvStoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn get_unset_key_returns_none() {
        let store = InMemoryKvStore::new();
        assert!(store.get("portfolio_data").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = InMemoryKvStore::new();

        store
            .set("portfolio_data", json!({"certifications": ["CKA"]}))
            .await
            .unwrap();

        let value = store.get("portfolio_data").await.unwrap();
        assert_eq!(value, Some(json!({"certifications": ["CKA"]})));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryKvStore::new();
        let clone = store.clone();

        clone.set("contact_messages", json!([])).await.unwrap();

        assert_eq!(
            store.get("contact_messages").await.unwrap(),
            Some(json!([]))
        );
    }
}
