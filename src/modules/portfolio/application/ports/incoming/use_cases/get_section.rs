use async_trait::async_trait;

use crate::portfolio::domain::entities::{Section, SectionValue};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSectionError {
    #[error("Section not found")]
    SectionNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Fetch one top-level section of the stored record.
///
/// Absence is an error, never a fabricated empty value: if no record has
/// been stored, or the record does not carry the section, the caller gets
/// `SectionNotFound`.
#[async_trait]
pub trait GetSectionUseCase: Send + Sync {
    async fn execute(&self, section: Section) -> Result<SectionValue, GetSectionError>;
}
