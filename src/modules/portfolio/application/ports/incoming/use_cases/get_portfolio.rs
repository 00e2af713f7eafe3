use async_trait::async_trait;

use crate::portfolio::domain::entities::PortfolioRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetPortfolioError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Fetch the whole portfolio record, seeding the built-in default when
/// nothing has been stored yet.
#[async_trait]
pub trait GetPortfolioUseCase: Send + Sync {
    async fn execute(&self) -> Result<PortfolioRecord, GetPortfolioError>;
}
