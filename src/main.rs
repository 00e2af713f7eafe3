pub mod modules;
pub use modules::contact;
pub use modules::media;
pub use modules::portfolio;
pub mod api;
pub mod health;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

use crate::contact::application::ports::incoming::use_cases::{
    ListMessagesUseCase, SubmitMessageUseCase,
};
use crate::contact::application::services::{ListMessagesService, SubmitMessageService};
use crate::media::adapter::outgoing::GcsObjectStorage;
use crate::media::application::ports::incoming::use_cases::StoreUploadUseCase;
use crate::media::application::services::StoreUploadService;
use crate::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioUseCase, GetSectionUseCase, ReplacePortfolioUseCase, ReplaceSectionUseCase,
};
use crate::portfolio::application::services::{
    GetPortfolioService, GetSectionService, ReplacePortfolioService, ReplaceSectionService,
};
use crate::shared::api::custom_json_config;
use crate::shared::storage::PostgresKvStore;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub get_portfolio_use_case: Arc<dyn GetPortfolioUseCase + Send + Sync>,
    pub replace_portfolio_use_case: Arc<dyn ReplacePortfolioUseCase + Send + Sync>,
    pub get_section_use_case: Arc<dyn GetSectionUseCase + Send + Sync>,
    pub replace_section_use_case: Arc<dyn ReplaceSectionUseCase + Send + Sync>,
    pub submit_message_use_case: Arc<dyn SubmitMessageUseCase + Send + Sync>,
    pub list_messages_use_case: Arc<dyn ListMessagesUseCase + Send + Sync>,
    pub store_upload_use_case: Arc<dyn StoreUploadUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // 🚨 SAFETY GUARD: Prevent test-helpers in production
    #[cfg(feature = "test-helpers")]
    {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if env == "production" {
            panic!("🚨 FATAL: test-helpers feature enabled in production environment!");
        }
        tracing::warn!(
            "⚠️  Test helper routes are ENABLED for environment: {}",
            env
        );
    }

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let bucket =
        env::var("STORAGE_BUCKET").unwrap_or_else(|_| "portfolio-public-assets".to_string());

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Store adapters and services
    let kv_store = PostgresKvStore::new(Arc::clone(&db_arc));

    let get_portfolio_use_case = GetPortfolioService::new(kv_store.clone());
    let replace_portfolio_use_case = ReplacePortfolioService::new(kv_store.clone());
    let get_section_use_case = GetSectionService::new(kv_store.clone());
    let replace_section_use_case = ReplaceSectionService::new(kv_store.clone());

    let submit_message_use_case = SubmitMessageService::new(kv_store.clone());
    let list_messages_use_case = ListMessagesService::new(kv_store);

    let object_storage = GcsObjectStorage::new(bucket);
    let store_upload_use_case = StoreUploadService::new(object_storage);

    let state = AppState {
        get_portfolio_use_case: Arc::new(get_portfolio_use_case),
        replace_portfolio_use_case: Arc::new(replace_portfolio_use_case),
        get_section_use_case: Arc::new(get_section_use_case),
        replace_section_use_case: Arc::new(replace_section_use_case),
        submit_message_use_case: Arc::new(submit_message_use_case),
        list_messages_use_case: Arc::new(list_messages_use_case),
        store_upload_use_case: Arc::new(store_upload_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes);

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_portfolio_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::get_section_handler);
    cfg.service(crate::portfolio::adapter::incoming::web::routes::update_section_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_message_handler);
    cfg.service(crate::contact::adapter::incoming::web::routes::get_messages_handler);
    // Media
    cfg.service(crate::media::adapter::incoming::web::routes::upload_file_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
