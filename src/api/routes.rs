use axum::{routing::get, Router};

pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(super::handlers::health_check))
        .route("/info", get(super::handlers::server_info))
}
