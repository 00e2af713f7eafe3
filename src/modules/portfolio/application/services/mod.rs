mod get_portfolio_service;
mod get_section_service;
mod replace_portfolio_service;
mod replace_section_service;

pub use get_portfolio_service::GetPortfolioService;
pub use get_section_service::GetSectionService;
pub use replace_portfolio_service::ReplacePortfolioService;
pub use replace_section_service::ReplaceSectionService;
