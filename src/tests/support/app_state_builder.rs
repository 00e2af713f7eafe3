use actix_web::web;
use std::sync::Arc;

use crate::contact::application::ports::incoming::use_cases::{
    ListMessagesUseCase, SubmitMessageUseCase,
};
use crate::media::application::ports::incoming::use_cases::StoreUploadUseCase;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, GetSectionUseCase, ReplacePortfolioUseCase, ReplaceSectionUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    get_portfolio: Option<Arc<dyn GetPortfolioUseCase + Send + Sync>>,
    replace_portfolio: Option<Arc<dyn ReplacePortfolioUseCase + Send + Sync>>,
    get_section: Option<Arc<dyn GetSectionUseCase + Send + Sync>>,
    replace_section: Option<Arc<dyn ReplaceSectionUseCase + Send + Sync>>,
    submit_message: Option<Arc<dyn SubmitMessageUseCase + Send + Sync>>,
    list_messages: Option<Arc<dyn ListMessagesUseCase + Send + Sync>>,
    store_upload: Option<Arc<dyn StoreUploadUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            get_portfolio: Some(Arc::new(StubGetPortfolioUseCase)),
            replace_portfolio: Some(Arc::new(StubReplacePortfolioUseCase)),
            get_section: Some(Arc::new(StubGetSectionUseCase)),
            replace_section: Some(Arc::new(StubReplaceSectionUseCase)),
            submit_message: Some(Arc::new(StubSubmitMessageUseCase)),
            list_messages: Some(Arc::new(StubListMessagesUseCase)),
            store_upload: Some(Arc::new(StubStoreUploadUseCase)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_portfolio(
        mut self,
        uc: impl GetPortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_portfolio = Some(Arc::new(uc));
        self
    }

    pub fn with_replace_portfolio(
        mut self,
        uc: impl ReplacePortfolioUseCase + Send + Sync + 'static,
    ) -> Self {
        self.replace_portfolio = Some(Arc::new(uc));
        self
    }

    pub fn with_get_section(
        mut self,
        uc: impl GetSectionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_section = Some(Arc::new(uc));
        self
    }

    pub fn with_replace_section(
        mut self,
        uc: impl ReplaceSectionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.replace_section = Some(Arc::new(uc));
        self
    }

    pub fn with_submit_message(
        mut self,
        uc: impl SubmitMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_message = Some(Arc::new(uc));
        self
    }

    pub fn with_list_messages(
        mut self,
        uc: impl ListMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.list_messages = Some(Arc::new(uc));
        self
    }

    pub fn with_store_upload(
        mut self,
        uc: impl StoreUploadUseCase + Send + Sync + 'static,
    ) -> Self {
        self.store_upload = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            get_portfolio_use_case: self.get_portfolio.unwrap(),
            replace_portfolio_use_case: self.replace_portfolio.unwrap(),
            get_section_use_case: self.get_section.unwrap(),
            replace_section_use_case: self.replace_section.unwrap(),
            submit_message_use_case: self.submit_message.unwrap(),
            list_messages_use_case: self.list_messages.unwrap(),
            store_upload_use_case: self.store_upload.unwrap(),
        })
    }
}
