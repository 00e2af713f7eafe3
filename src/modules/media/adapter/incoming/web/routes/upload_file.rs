use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use futures::TryStreamExt;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::media::application::ports::incoming::use_cases::{
    StoreUploadCommand, StoreUploadError, UploadKind,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

/// Upload responses carry the URL at the top level, not under `data`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,

    /// Public URL of the stored object.
    pub url: String,
}

/// Multipart form shape, for the API docs only.
#[derive(ToSchema)]
#[allow(dead_code)]
struct UploadForm {
    /// The file to store.
    #[schema(value_type = String, format = Binary)]
    file: String,

    /// Either `photo` or `resume`; defaults to `photo`.
    #[schema(example = "photo")]
    r#type: String,
}

//
// ──────────────────────────────────────────────────────────
// Multipart parsing
// ──────────────────────────────────────────────────────────
//

struct FilePart {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

async fn read_field_bytes(field: &mut actix_multipart::Field) -> Result<Vec<u8>, String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(|e| e.to_string())? {
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

async fn parse_form(
    payload: &mut Multipart,
) -> Result<(Option<FilePart>, Option<String>), String> {
    let mut file: Option<FilePart> = None;
    let mut kind_raw: Option<String> = None;

    while let Some(mut field) = payload.try_next().await.map_err(|e| e.to_string())? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "file" => {
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or_default()
                    .to_string();

                let content_type = field
                    .content_type()
                    .map(|mime| mime.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let bytes = read_field_bytes(&mut field).await?;

                file = Some(FilePart {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "type" => {
                let bytes = read_field_bytes(&mut field).await?;
                kind_raw = Some(String::from_utf8_lossy(&bytes).trim().to_string());
            }
            // Unknown fields are drained and ignored.
            _ => {
                read_field_bytes(&mut field).await?;
            }
        }
    }

    Ok((file, kind_raw))
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "media",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored; public URL returned", body = UploadResponse),
        (status = 400, description = "No file part, or unknown upload type", body = crate::api::schemas::ErrorResponse),
        (status = 502, description = "Storage provider failure", body = crate::api::schemas::ErrorResponse)
    )
)]
#[post("/api/upload")]
pub async fn upload_file_handler(
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let (file, kind_raw) = match parse_form(&mut payload).await {
        Ok(parts) => parts,
        Err(e) => return ApiResponse::bad_request(&format!("Malformed multipart body: {e}")),
    };

    // An absent type field means a photo, matching the lenient form the
    // dashboard has always sent.
    let kind = match kind_raw.as_deref() {
        None | Some("") => UploadKind::Photo,
        Some(raw) => match raw.parse::<UploadKind>() {
            Ok(kind) => kind,
            Err(err) => return ApiResponse::bad_request(&err.to_string()),
        },
    };

    let Some(file) = file else {
        return ApiResponse::bad_request("No file provided");
    };

    let command =
        match StoreUploadCommand::new(kind, file.file_name, file.content_type, file.bytes) {
            Ok(cmd) => cmd,
            Err(err) => return ApiResponse::bad_request(&err.to_string()),
        };

    match data.store_upload_use_case.execute(command).await {
        Ok(url) => HttpResponse::Ok().json(UploadResponse { success: true, url }),
        Err(StoreUploadError::StorageError(e)) => {
            error!("Storage error during upload: {}", e);
            ApiResponse::bad_gateway("Failed to store uploaded file")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::media::application::ports::incoming::use_cases::StoreUploadUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockStoreUploadUseCase {
        result: Result<String, StoreUploadError>,
    }

    impl MockStoreUploadUseCase {
        fn success(url: &str) -> Self {
            Self {
                result: Ok(url.to_string()),
            }
        }

        fn storage_error(msg: &str) -> Self {
            Self {
                result: Err(StoreUploadError::StorageError(msg.to_string())),
            }
        }
    }

    #[async_trait]
    impl StoreUploadUseCase for MockStoreUploadUseCase {
        async fn execute(&self, _command: StoreUploadCommand) -> Result<String, StoreUploadError> {
            self.result.clone()
        }
    }

    const BOUNDARY: &str = "-----portfolio-test-boundary";

    fn form_body(parts: &[(&str, Option<(&str, &str)>, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();

        for (name, file_meta, payload) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match file_meta {
                Some((filename, content_type)) => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; \
                             filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                }
                None => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                }
            }
            body.extend_from_slice(payload);
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/upload")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body)
    }

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn upload_returns_the_public_url() {
        let state = TestAppStateBuilder::default()
            .with_store_upload(MockStoreUploadUseCase::success(
                "https://storage.googleapis.com/bucket/photo-1.png",
            ))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(upload_file_handler)).await;

        let body = form_body(&[
            (
                "file",
                Some(("avatar.png", "image/png")),
                b"\x89PNG data".as_slice(),
            ),
            ("type", None, b"photo".as_slice()),
        ]);

        let resp = test::call_service(&app, multipart_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(
            json["url"],
            "https://storage.googleapis.com/bucket/photo-1.png"
        );
    }

    #[actix_web::test]
    async fn upload_without_type_defaults_to_photo() {
        let state = TestAppStateBuilder::default()
            .with_store_upload(MockStoreUploadUseCase::success("https://example.com/u"))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(upload_file_handler)).await;

        let body = form_body(&[("file", Some(("avatar.png", "image/png")), b"data".as_slice())]);

        let resp = test::call_service(&app, multipart_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn upload_without_file_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(upload_file_handler)).await;

        let body = form_body(&[("type", None::<(&str, &str)>, b"photo".as_slice())]);

        let resp = test::call_service(&app, multipart_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "No file provided");
    }

    #[actix_web::test]
    async fn upload_with_unknown_type_returns_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app =
            test::init_service(App::new().app_data(state).service(upload_file_handler)).await;

        let body = form_body(&[
            ("file", Some(("clip.mp4", "video/mp4")), b"data".as_slice()),
            ("type", None, b"video".as_slice()),
        ]);

        let resp = test::call_service(&app, multipart_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"], "Unknown upload type: video");
    }

    #[actix_web::test]
    async fn upload_storage_error_returns_bad_gateway() {
        let state = TestAppStateBuilder::default()
            .with_store_upload(MockStoreUploadUseCase::storage_error("GCS unavailable"))
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(upload_file_handler)).await;

        let body = form_body(&[
            ("file", Some(("avatar.png", "image/png")), b"data".as_slice()),
            ("type", None, b"photo".as_slice()),
        ]);

        let resp = test::call_service(&app, multipart_request(body).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let json = read_json(resp).await;
        assert_eq!(json["success"], false);
    }
}
