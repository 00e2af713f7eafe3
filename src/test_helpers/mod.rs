use actix_web::{web, HttpResponse, Result};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct ResetResponse {
    deleted_documents: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

/// E2E helper routes. Only mounted with the `test-helpers` feature, and
/// `start()` refuses to boot with them in production.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/test/reset", web::post().to(reset_store));
    cfg.route("/test/health", web::get().to(test_health));
}

/// Drop every stored document so an e2e run starts from the seed state.
async fn reset_store(db: web::Data<Arc<DatabaseConnection>>) -> Result<HttpResponse> {
    match db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "DELETE FROM kv_store",
        ))
        .await
    {
        Ok(result) => Ok(HttpResponse::Ok().json(ResetResponse {
            deleted_documents: result.rows_affected(),
        })),
        Err(e) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": e.to_string()
        }))),
    }
}

async fn test_health() -> Result<HttpResponse> {
    let environment = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment,
    }))
}
