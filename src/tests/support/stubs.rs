use async_trait::async_trait;

use crate::contact::application::ports::incoming::use_cases::{
    ListMessagesError, ListMessagesUseCase, SubmitMessageCommand, SubmitMessageError,
    SubmitMessageUseCase,
};
use crate::contact::domain::entities::ContactMessage;
use crate::media::application::ports::incoming::use_cases::{
    StoreUploadCommand, StoreUploadError, StoreUploadUseCase,
};
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioError, GetPortfolioUseCase, GetSectionError, GetSectionUseCase,
    ReplacePortfolioError, ReplacePortfolioUseCase, ReplaceSectionCommand, ReplaceSectionError,
    ReplaceSectionUseCase,
};
use crate::portfolio::domain::entities::{PortfolioRecord, Section, SectionValue};

// Benign defaults for handlers a test does not exercise. Tests that care
// about a use case's behavior install their own mock via the builder.

pub struct StubGetPortfolioUseCase;

#[async_trait]
impl GetPortfolioUseCase for StubGetPortfolioUseCase {
    async fn execute(&self) -> Result<PortfolioRecord, GetPortfolioError> {
        Ok(PortfolioRecord::default())
    }
}

pub struct StubReplacePortfolioUseCase;

#[async_trait]
impl ReplacePortfolioUseCase for StubReplacePortfolioUseCase {
    async fn execute(
        &self,
        record: PortfolioRecord,
    ) -> Result<PortfolioRecord, ReplacePortfolioError> {
        Ok(record)
    }
}

pub struct StubGetSectionUseCase;

#[async_trait]
impl GetSectionUseCase for StubGetSectionUseCase {
    async fn execute(&self, _section: Section) -> Result<SectionValue, GetSectionError> {
        Err(GetSectionError::SectionNotFound)
    }
}

pub struct StubReplaceSectionUseCase;

#[async_trait]
impl ReplaceSectionUseCase for StubReplaceSectionUseCase {
    async fn execute(
        &self,
        command: ReplaceSectionCommand,
    ) -> Result<SectionValue, ReplaceSectionError> {
        Ok(command.into_value())
    }
}

pub struct StubSubmitMessageUseCase;

#[async_trait]
impl SubmitMessageUseCase for StubSubmitMessageUseCase {
    async fn execute(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<ContactMessage, SubmitMessageError> {
        Ok(ContactMessage {
            id: 0,
            name: command.name().to_string(),
            email: command.email().to_string(),
            message: command.message().to_string(),
            timestamp: "1970-01-01T00:00:00+00:00".to_string(),
        })
    }
}

pub struct StubListMessagesUseCase;

#[async_trait]
impl ListMessagesUseCase for StubListMessagesUseCase {
    async fn execute(&self) -> Result<Vec<ContactMessage>, ListMessagesError> {
        Ok(Vec::new())
    }
}

pub struct StubStoreUploadUseCase;

#[async_trait]
impl StoreUploadUseCase for StubStoreUploadUseCase {
    async fn execute(&self, _command: StoreUploadCommand) -> Result<String, StoreUploadError> {
        Ok("https://storage.googleapis.com/test-bucket/stub".to_string())
    }
}
