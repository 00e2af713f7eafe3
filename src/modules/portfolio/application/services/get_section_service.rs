use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    GetSectionError, GetSectionUseCase,
};
use crate::portfolio::domain::entities::{PortfolioRecord, Section, SectionValue};
use crate::shared::storage::{KvStore, PORTFOLIO_KEY};

#[derive(Debug, Clone)]
pub struct GetSectionService<S>
where
    S: KvStore + Send + Sync,
{
    store: S,
}

impl<S> GetSectionService<S>
where
    S: KvStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> GetSectionUseCase for GetSectionService<S>
where
    S: KvStore + Send + Sync,
{
    async fn execute(&self, section: Section) -> Result<SectionValue, GetSectionError> {
        // Unlike a full-record read, a section read never seeds the
        // default: an absent record is NotFound.
        let raw = self
            .store
            .get(PORTFOLIO_KEY)
            .await
            .map_err(|e| GetSectionError::StorageError(e.to_string()))?
            .ok_or(GetSectionError::SectionNotFound)?;

        let record: PortfolioRecord =
            serde_json::from_value(raw).map_err(|e| GetSectionError::StorageError(e.to_string()))?;

        record
            .section(section)
            .ok_or(GetSectionError::SectionNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::InMemoryKvStore;
    use serde_json::json;

    #[tokio::test]
    async fn absent_record_is_not_found() {
        let service = GetSectionService::new(InMemoryKvStore::new());

        let err = service.execute(Section::Skills).await.unwrap_err();
        assert!(matches!(err, GetSectionError::SectionNotFound));
    }

    #[tokio::test]
    async fn absent_section_is_not_found() {
        let store = InMemoryKvStore::new();
        store
            .seed(PORTFOLIO_KEY, json!({"certifications": ["CKA"]}))
            .await;

        let service = GetSectionService::new(store);

        let err = service.execute(Section::Skills).await.unwrap_err();
        assert!(matches!(err, GetSectionError::SectionNotFound));
    }

    #[tokio::test]
    async fn present_section_is_returned() {
        let store = InMemoryKvStore::new();
        store
            .seed(PORTFOLIO_KEY, json!({"certifications": ["CKA", "CKAD"]}))
            .await;

        let service = GetSectionService::new(store);

        let value = service.execute(Section::Certifications).await.unwrap();
        assert_eq!(
            value,
            SectionValue::Certifications(vec!["CKA".to_string(), "CKAD".to_string()])
        );
    }

    #[tokio::test]
    async fn empty_stored_section_is_returned_not_treated_as_absent() {
        let store = InMemoryKvStore::new();
        store.seed(PORTFOLIO_KEY, json!({"skills": []})).await;

        let service = GetSectionService::new(store);

        let value = service.execute(Section::Skills).await.unwrap();
        assert_eq!(value, SectionValue::Skills(vec![]));
    }
}
