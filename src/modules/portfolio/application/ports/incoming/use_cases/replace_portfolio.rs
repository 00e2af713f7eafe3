use async_trait::async_trait;

use crate::portfolio::domain::entities::PortfolioRecord;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplacePortfolioError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Replace the stored record wholesale. No merge, no concurrency check:
/// last writer wins.
#[async_trait]
pub trait ReplacePortfolioUseCase: Send + Sync {
    async fn execute(&self, record: PortfolioRecord)
        -> Result<PortfolioRecord, ReplacePortfolioError>;
}
