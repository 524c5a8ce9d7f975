//! Shared helpers for the HTTP tests.

/// The full router, wired the way `main` wires it.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(api_server::observability::RequestIdMiddleware)
                .app_data(actix_web::web::Data::new($state))
                .configure(api_server::handlers::configure_routes)
                .default_service(actix_web::web::to(api_server::handlers::not_found)),
        )
        .await
    };
}
