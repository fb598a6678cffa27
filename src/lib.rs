use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod api;
pub mod config;
pub mod gemini;
pub mod pages;
pub mod sanitize;

/// Assemble the full application router. Shared by `main` and the
/// integration tests.
pub fn app(state: api::AppState) -> Router {
    Router::new()
        .merge(pages::router())
        .merge(api::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state)
}
