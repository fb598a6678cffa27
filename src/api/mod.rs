use std::sync::Arc;

use axum::{routing::post, Router};

use crate::gemini::GeminiClient;

pub mod handlers;
pub mod types;

#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate", post(handlers::generate))
}
