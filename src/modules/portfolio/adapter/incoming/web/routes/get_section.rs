use actix_web::{get, web, Responder};
use tracing::error;

use crate::portfolio::application::ports::incoming::use_cases::GetSectionError;
use crate::portfolio::domain::entities::Section;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolio/{section}",
    tag = "portfolio",
    params(
        ("section" = String, Path, description = "Section name: profile, about, skills, projects, experiences, certifications, contact or seo")
    ),
    responses(
        (status = 200, description = "The stored section value", body = crate::api::schemas::SuccessResponse<serde_json::Value>),
        (status = 404, description = "Unknown section name, or no value stored for it", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/portfolio/{section}")]
pub async fn get_section_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let section: Section = match path.into_inner().parse() {
        Ok(section) => section,
        Err(_) => return ApiResponse::not_found("Section not found"),
    };

    match data.get_section_use_case.execute(section).await {
        Ok(value) => ApiResponse::success(value),
        Err(GetSectionError::SectionNotFound) => ApiResponse::not_found("Section not found"),
        Err(GetSectionError::StorageError(e)) => {
            error!("Error fetching portfolio section {}: {}", section.as_str(), e);
            ApiResponse::internal_error()
        }
    }
}
