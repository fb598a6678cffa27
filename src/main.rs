use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dashgen::{api::AppState, config::ServerConfig, gemini::GeminiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let state = AppState {
        gemini: Arc::new(GeminiClient::new(&config)),
    };
    let app = dashgen::app(state);

    println!("🚀 Starting dashboard generator...");
    println!("🌐 HTTP listening on http://{}", config.bind_addr);
    println!("🔑 Get your free Gemini API key at: https://aistudio.google.com/apikey");

    let listener = TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
