#![recursion_limit = "256"]

mod llm;
mod routes;
mod state;

use std::sync::Arc;

use llm::config::LlmConfig;
use llm::openai::OpenAiClient;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "folio failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let key_length = std::env::var(llm::config::API_KEY_VAR).map_or(0, |k| k.trim().len());
    tracing::info!(has_api_key = key_length > 0, key_length, "environment");

    let config = LlmConfig::from_env().map_err(|e| e.to_string())?;
    let client = OpenAiClient::new(config).map_err(|e| e.to_string())?;
    tracing::info!(model = client.model(), "LLM client initialized");

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .map_err(|e| format!("invalid PORT: {e}"))?;

    let state = state::AppState::new(Arc::new(client));
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| format!("failed to bind port {port}: {e}"))?;

    tracing::info!(%port, "folio listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server failed: {e}"))
}
