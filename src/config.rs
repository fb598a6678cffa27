/// Server configuration, resolved once at startup.
///
/// Everything has a default so `cargo run` works out of the box; the
/// upstream base URL is overridable mainly so tests can point the client
/// at a stub server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub upstream_base_url: String,
    pub model: String,
}

const DEFAULT_UPSTREAM: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = dotenvy::var("PORT").unwrap_or_else(|_| "3000".to_string());
        let bind_addr = format!("0.0.0.0:{port}");
        let upstream_base_url = dotenvy::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM.to_string());
        let model = dotenvy::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            bind_addr,
            upstream_base_url,
            model,
        }
    }
}
