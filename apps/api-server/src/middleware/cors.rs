//! CORS policy for the browser frontend.

use actix_cors::Cors;
use actix_web::http::{Method, header};

use crate::config::CorsOrigins;

/// Build the CORS layer.
///
/// `CorsOrigins::Any` allows every origin (local development); otherwise only
/// the listed origins may call the API.
pub fn cors_layer(allowed_origins: &CorsOrigins) -> Cors {
    let CorsOrigins::List(origins) = allowed_origins else {
        return Cors::permissive();
    };

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::HeaderName::from_static("x-request-id")])
        .max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    #[actix_rt::test]
    async fn test_listed_origin_passes_preflight() {
        let origins = CorsOrigins::List(vec!["http://localhost:5173".to_string()]);
        let app = test::init_service(
            App::new()
                .wrap(cors_layer(&origins))
                .route("/api/posts", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/api/posts")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }
}
