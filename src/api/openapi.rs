use crate::api::schemas::{ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::contact::adapter::incoming::web::routes::SubmitMessageRequest;
use crate::contact::domain::entities::ContactMessage;
use crate::media::adapter::incoming::web::routes::UploadResponse;
use crate::portfolio::domain::entities::{
    About, ContactCopy, Experience, Highlight, PortfolioRecord, Profile, Project, Seo,
    SkillCategory, SkillItem,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content Store API",
        version = "1.0.0",
        description = "Key-value backed content store for the portfolio site: the \
                       portfolio record, visitor contact messages, and public file \
                       uploads. No authentication is enforced on any endpoint; the \
                       admin gate lives entirely in the client.",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Portfolio endpoints
        crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::portfolio::adapter::incoming::web::routes::update_portfolio_handler,
        crate::portfolio::adapter::incoming::web::routes::get_section_handler,
        crate::portfolio::adapter::incoming::web::routes::update_section_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::submit_message_handler,
        crate::contact::adapter::incoming::web::routes::get_messages_handler,

        // Media endpoints
        crate::media::adapter::incoming::web::routes::upload_file_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<PortfolioRecord>,
            ErrorResponse,

            // Portfolio DTOs
            PortfolioRecord,
            Profile,
            About,
            Highlight,
            SkillCategory,
            SkillItem,
            Project,
            Experience,
            ContactCopy,
            Seo,

            // Contact DTOs
            ContactMessage,
            SubmitMessageRequest,

            // Media DTOs
            UploadResponse
        )
    ),
    tags(
        (name = "portfolio", description = "Portfolio record and section endpoints"),
        (name = "contact", description = "Contact message endpoints"),
        (name = "media", description = "File upload endpoints"),
    )
)]
pub struct ApiDoc;
