mod get_portfolio;
mod get_section;
mod replace_portfolio;
mod replace_section;

pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use get_section::{GetSectionError, GetSectionUseCase};
pub use replace_portfolio::{ReplacePortfolioError, ReplacePortfolioUseCase};
pub use replace_section::{
    ReplaceSectionCommand, ReplaceSectionCommandError, ReplaceSectionError, ReplaceSectionUseCase,
};
