use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::contact::application::ports::incoming::use_cases::{
    SubmitMessageCommand, SubmitMessageCommandError, SubmitMessageError,
};
use crate::contact::domain::entities::ContactMessage;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Fields default to empty so a missing key and a blank value are
/// rejected the same way, by the command.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitMessageRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = SubmitMessageRequest,
    responses(
        (status = 201, description = "Message stored", body = crate::api::schemas::SuccessResponse<ContactMessage>),
        (status = 400, description = "A required field is missing", body = crate::api::schemas::ErrorResponse),
        (status = 500, description = "Storage failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn submit_message_handler(
    payload: web::Json<SubmitMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();

    let command = match SubmitMessageCommand::new(payload.name, payload.email, payload.message) {
        Ok(cmd) => cmd,
        Err(err @ SubmitMessageCommandError::MissingField(_)) => {
            return ApiResponse::bad_request(&err.to_string())
        }
    };

    match data.submit_message_use_case.execute(command).await {
        Ok(message) => ApiResponse::created(message),
        Err(SubmitMessageError::StorageError(e)) => {
            error!("Error saving contact message: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::contact::application::ports::incoming::use_cases::SubmitMessageUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockSubmitMessageUseCase {
        result: Result<ContactMessage, SubmitMessageError>,
    }

    impl MockSubmitMessageUseCase {
        fn success(message: ContactMessage) -> Self {
            Self {
                result: Ok(message),
            }
        }

        fn storage_error(msg: &str) -> Self {
            Self {
                result: Err(SubmitMessageError::StorageError(msg.to_string())),
            }
        }
    }

    #[async_trait]
    impl SubmitMessageUseCase for MockSubmitMessageUseCase {
        async fn execute(
            &self,
            _command: SubmitMessageCommand,
        ) -> Result<ContactMessage, SubmitMessageError> {
            self.result.clone()
        }
    }

    fn sample_message() -> ContactMessage {
        ContactMessage {
            id: 1_752_000_000_000,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            message: "hi".to_string(),
            timestamp: "2026-07-08T18:40:00+00:00".to_string(),
        }
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn submit_message_returns_the_stored_message() {
        let state = TestAppStateBuilder::default()
            .with_submit_message(MockSubmitMessageUseCase::success(sample_message()))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(submit_message_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "A",
                "email": "a@x.com",
                "message": "hi"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["name"], "A");
        assert_eq!(json["data"]["id"], 1_752_000_000_000i64);
    }

    #[actix_web::test]
    async fn missing_field_returns_bad_request() {
        // The use case is never reached; presence is checked by the command.
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(submit_message_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "A",
                "email": "a@x.com"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Missing required field: message");
    }

    #[actix_web::test]
    async fn blank_name_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(submit_message_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "   ",
                "email": "a@x.com",
                "message": "hi"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"], "Missing required field: name");
    }

    #[actix_web::test]
    async fn submit_message_storage_error_returns_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_submit_message(MockSubmitMessageUseCase::storage_error("db down"))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(submit_message_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(serde_json::json!({
                "name": "A",
                "email": "a@x.com",
                "message": "hi"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
