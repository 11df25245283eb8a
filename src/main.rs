use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pollyglot::config::AppConfig;
use pollyglot::routes;
use pollyglot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::from_config(&config));
    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("PollyGlot backend running at http://localhost:{}", config.port);
    info!("API endpoint: http://localhost:{}/api/translate", config.port);
    info!(model = %config.openai.model, base_url = %config.openai.base_url, "OpenAI API key loaded");
    match config.agent_timeout {
        Some(limit) => info!("agent timeout: {}s", limit.as_secs()),
        None => info!("agent timeout: none"),
    }

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
