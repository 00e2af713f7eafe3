mod get_portfolio;
mod get_section;
mod update_portfolio;
mod update_section;

// Glob re-exports so the OpenAPI macro can resolve the handlers here.
pub use get_portfolio::*;
pub use get_section::*;
pub use update_portfolio::*;
pub use update_section::*;
