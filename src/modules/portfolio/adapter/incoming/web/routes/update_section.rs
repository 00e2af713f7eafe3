use actix_web::{post, web, Responder};
use tracing::error;

use crate::portfolio::application::ports::incoming::use_cases::{
    ReplaceSectionCommand, ReplaceSectionCommandError, ReplaceSectionError,
};
use crate::portfolio::domain::entities::Section;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/portfolio/{section}",
    tag = "portfolio",
    params(
        ("section" = String, Path, description = "Section name: profile, about, skills, projects, experiences, certifications, contact or seo")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Section replaced; the stored value is echoed back", body = crate::api::schemas::SuccessResponse<serde_json::Value>),
        (status = 400, description = "Payload does not match the section's shape", body = crate::api::schemas::ErrorResponse),
        (status = 404, description = "Unknown section name", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/portfolio/{section}")]
pub async fn update_section_handler(
    path: web::Path<String>,
    payload: web::Json<serde_json::Value>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section: Section = match path.into_inner().parse() {
        Ok(section) => section,
        Err(_) => return ApiResponse::not_found("Section not found"),
    };

    let command = match ReplaceSectionCommand::new(section, payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(err @ ReplaceSectionCommandError::InvalidShape { .. }) => {
            return ApiResponse::bad_request(&err.to_string())
        }
    };

    match data.replace_section_use_case.execute(command).await {
        Ok(value) => ApiResponse::success(value),
        Err(ReplaceSectionError::StorageError(e)) => {
            error!(
                "Error replacing portfolio section {}: {}",
                section.as_str(),
                e
            );
            ApiResponse::internal_error()
        }
    }
}
