//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::{HttpResponse, web};
use quill_shared::ErrorResponse;

use crate::middleware::error::{json_error_handler, path_error_handler, query_error_handler};

pub use posts::DEFAULT_PAGE_SIZE;

/// Configure all application routes and their extractor error handling.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/posts")
                        .route("", web::get().to(posts::list_posts))
                        .route("", web::post().to(posts::create_post))
                        .route("/{id}", web::get().to(posts::get_post))
                        .route("/{id}", web::put().to(posts::update_post))
                        .route("/{id}", web::delete().to(posts::delete_post)),
                ),
        );
}

/// Fallback for unknown routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Route does not exist"))
}
