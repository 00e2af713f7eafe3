use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase,
};
use crate::portfolio::domain::{default_record, entities::PortfolioRecord};
use crate::shared::storage::{KvStore, PORTFOLIO_KEY};

#[derive(Debug, Clone)]
pub struct GetPortfolioService<S>
where
    S: KvStore + Send + Sync,
{
    store: S,
}

impl<S> GetPortfolioService<S>
where
    S: KvStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetPortfolioUseCase for GetPortfolioService<S>
where
    S: KvStore + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioRecord, GetPortfolioError> {
        let raw = self
            .store
            .get(PORTFOLIO_KEY)
            .await
            .map_err(|e| GetPortfolioError::StorageError(e.to_string()))?;

        match raw {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| GetPortfolioError::StorageError(e.to_string())),
            None => {
                // First read: seed the built-in default so the next read
                // is served from storage.
                let record = default_record();
                let value = serde_json::to_value(&record)
                    .map_err(|e| GetPortfolioError::StorageError(e.to_string()))?;

                self.store
                    .set(PORTFOLIO_KEY, value)
                    .await
                    .map_err(|e| GetPortfolioError::StorageError(e.to_string()))?;

                Ok(record)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::InMemoryKvStore;
    use serde_json::json;

    #[tokio::test]
    async fn first_read_seeds_and_returns_the_default() {
        let store = InMemoryKvStore::new();
        let service = GetPortfolioService::new(store.clone());

        let record = service.execute().await.unwrap();

        assert_eq!(record, default_record());

        // The default is now persisted.
        let stored = store.get(PORTFOLIO_KEY).await.unwrap().unwrap();
        assert_eq!(stored, serde_json::to_value(default_record()).unwrap());
    }

    #[tokio::test]
    async fn second_read_returns_the_same_record() {
        let service = GetPortfolioService::new(InMemoryKvStore::new());

        let first = service.execute().await.unwrap();
        let second = service.execute().await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn stored_record_is_returned_as_is() {
        let store = InMemoryKvStore::new();
        store
            .seed(PORTFOLIO_KEY, json!({"certifications": ["CKA"]}))
            .await;

        let service = GetPortfolioService::new(store);
        let record = service.execute().await.unwrap();

        assert_eq!(record.certifications, Some(vec!["CKA".to_string()]));
        assert!(record.profile.is_none());
    }

    #[tokio::test]
    async fn corrupt_stored_record_is_a_storage_error() {
        let store = InMemoryKvStore::new();
        store.seed(PORTFOLIO_KEY, json!("not an object")).await;

        let service = GetPortfolioService::new(store);
        let err = service.execute().await.unwrap_err();

        assert!(matches!(err, GetPortfolioError::StorageError(_)));
    }
}
