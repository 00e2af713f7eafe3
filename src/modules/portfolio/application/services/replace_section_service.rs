use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    ReplaceSectionCommand, ReplaceSectionError, ReplaceSectionUseCase,
};
use crate::portfolio::domain::entities::{PortfolioRecord, SectionValue};
use crate::shared::storage::{KvStore, PORTFOLIO_KEY};

/// Read-modify-write replacement of a single section.
///
/// The read and the write are two separate store operations, so two
/// concurrent editors can lose each other's section updates. Known
/// lost-update hazard, accepted: the store offers no compare-and-swap
/// and admin traffic is a single editor in practice.
#[derive(Debug, Clone)]
pub struct ReplaceSectionService<S>
where
    S: KvStore + Send + Sync,
{
    store: S,
}

impl<S> ReplaceSectionService<S>
where
    S: KvStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ReplaceSectionUseCase for ReplaceSectionService<S>
where
    S: KvStore + Send + Sync,
{
    async fn execute(
        &self,
        command: ReplaceSectionCommand,
    ) -> Result<SectionValue, ReplaceSectionError> {
        let raw = self
            .store
            .get(PORTFOLIO_KEY)
            .await
            .map_err(|e| ReplaceSectionError::StorageError(e.to_string()))?;

        // A section write on an empty store starts from an empty record,
        // not from the seeded default.
        let mut record: PortfolioRecord = match raw {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| ReplaceSectionError::StorageError(e.to_string()))?,
            None => PortfolioRecord::default(),
        };

        let value = command.into_value();
        record.set_section(value.clone());

        let serialized = serde_json::to_value(&record)
            .map_err(|e| ReplaceSectionError::StorageError(e.to_string()))?;

        self.store
            .set(PORTFOLIO_KEY, serialized)
            .await
            .map_err(|e| ReplaceSectionError::StorageError(e.to_string()))?;

        Ok(value)
    }
}
