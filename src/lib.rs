use axum::{middleware, Router};

pub mod config;
pub mod http;
pub mod logging;

pub fn build_app() -> Router {
    Router::new()
        .fallback(http::handlers::greeting)
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
