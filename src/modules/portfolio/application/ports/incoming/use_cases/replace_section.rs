use async_trait::async_trait;
use serde_json::Value;

use crate::portfolio::domain::entities::{Section, SectionValue};

//
// ──────────────────────────────────────────────────────────
// Replace Section Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ReplaceSectionCommand {
    section: Section,
    value: SectionValue,
}

#[derive(Debug, thiserror::Error)]
pub enum ReplaceSectionCommandError {
    #[error("Invalid {section} payload: {detail}")]
    InvalidShape {
        section: &'static str,
        detail: String,
    },
}

impl ReplaceSectionCommand {
    /// Validate the raw payload against the section's shape.
    pub fn new(section: Section, raw: Value) -> Result<Self, ReplaceSectionCommandError> {
        let value =
            section
                .parse_value(raw)
                .map_err(|err| ReplaceSectionCommandError::InvalidShape {
                    section: section.as_str(),
                    detail: err.to_string(),
                })?;

        Ok(Self { section, value })
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn value(&self) -> &SectionValue {
        &self.value
    }

    pub fn into_value(self) -> SectionValue {
        self.value
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplaceSectionError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReplaceSectionUseCase: Send + Sync {
    async fn execute(
        &self,
        command: ReplaceSectionCommand,
    ) -> Result<SectionValue, ReplaceSectionError>;
}
