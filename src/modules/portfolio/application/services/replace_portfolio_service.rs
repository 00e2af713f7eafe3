use async_trait::async_trait;

use crate::portfolio::application::ports::incoming::use_cases::{
    ReplacePortfolioError, ReplacePortfolioUseCase,
};
use crate::portfolio::domain::entities::PortfolioRecord;
use crate::shared::storage::{KvStore, PORTFOLIO_KEY};

#[derive(Debug, Clone)]
pub struct ReplacePortfolioService<S>
where
    S: KvStore + Send + Sync,
{
    store: S,
}

impl<S> ReplacePortfolioService<S>
where
    S: KvStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ReplacePortfolioUseCase for ReplacePortfolioService<S>
where
    S: KvStore + Send + Sync,
{
    async fn execute(
        &self,
        record: PortfolioRecord,
    ) -> Result<PortfolioRecord, ReplacePortfolioError> {
        let value = serde_json::to_value(&record)
            .map_err(|e| ReplacePortfolioError::StorageError(e.to_string()))?;

        self.store
            .set(PORTFOLIO_KEY, value)
            .await
            .map_err(|e| ReplacePortfolioError::StorageError(e.to_string()))?;

        Ok(record)
    }
}
