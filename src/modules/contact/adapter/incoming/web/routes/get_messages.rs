use actix_web::{get, web, Responder};
use tracing::error;

use crate::contact::application::ports::incoming::use_cases::ListMessagesError;
use crate::contact::domain::entities::ContactMessage;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/contact/messages",
    tag = "contact",
    responses(
        (status = 200, description = "All stored messages, oldest first", body = crate::api::schemas::SuccessResponse<Vec<ContactMessage>>),
        (status = 500, description = "Storage failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/contact/messages")]
pub async fn get_messages_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_messages_use_case.execute().await {
        Ok(messages) => ApiResponse::success(messages),
        Err(ListMessagesError::StorageError(e)) => {
            error!("Error fetching contact messages: {}", e);
            ApiResponse::internal_error()
        }
    }
}
