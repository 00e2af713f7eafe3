use actix_web::{post, web, Responder};
use tracing::error;

use crate::portfolio::application::ports::incoming::use_cases::ReplacePortfolioError;
use crate::portfolio::domain::entities::PortfolioRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/portfolio",
    tag = "portfolio",
    request_body = PortfolioRecord,
    responses(
        (status = 200, description = "Record replaced wholesale; the stored value is echoed back", body = crate::api::schemas::SuccessResponse<PortfolioRecord>),
        (status = 400, description = "Malformed record payload", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/portfolio")]
pub async fn update_portfolio_handler(
    payload: web::Json<PortfolioRecord>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .replace_portfolio_use_case
        .execute(payload.into_inner())
        .await
    {
        Ok(record) => ApiResponse::success(record),
        Err(ReplacePortfolioError::StorageError(e)) => {
            error!("Error replacing portfolio record: {}", e);
            ApiResponse::internal_error()
        }
    }
}
