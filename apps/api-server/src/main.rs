//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use api_server::middleware::cors::cors_layer;
use api_server::observability::RequestIdMiddleware;
use api_server::telemetry::{TelemetryConfig, init_telemetry};
use api_server::{AppConfig, AppState, handlers};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env()?;

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await?;
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_layer(&origins))
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
