use axum::{extract::State, Json};
use tracing::info;
use uuid::Uuid;

use crate::{
    api::types::{ApiError, GenerateRequest, GenerateResponse},
    api::AppState,
    sanitize,
};

/// Proxy one generation request to the upstream model and hand back the
/// normalized document.
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let api_key = payload.api_key.trim();
    let prompt = payload.prompt.trim();

    if api_key.is_empty() || prompt.is_empty() {
        return Err(ApiError::bad_request("API key and prompt are required"));
    }

    let request_id = Uuid::new_v4().to_string();
    info!(%request_id, prompt_len = prompt.len(), "forwarding generation request");

    let raw = state.gemini.generate_content(api_key, prompt).await?;
    let text = sanitize::normalize_document(&raw);

    info!(%request_id, output_len = text.len(), "generation complete");
    Ok(Json(GenerateResponse { text }))
}
