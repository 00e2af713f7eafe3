use actix_web::{get, web, Responder};
use tracing::error;

use crate::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::portfolio::domain::entities::PortfolioRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Current portfolio record, seeded with the built-in default on first read", body = crate::api::schemas::SuccessResponse<PortfolioRecord>),
        (status = 500, description = "Storage failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_portfolio_use_case.execute().await {
        Ok(record) => ApiResponse::success(record),
        Err(GetPortfolioError::StorageError(e)) => {
            error!("Error fetching portfolio record: {}", e);
            ApiResponse::internal_error()
        }
    }
}
