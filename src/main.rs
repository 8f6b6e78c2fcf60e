use std::sync::Arc;

use tower_http::cors::CorsLayer;

mod config;
mod error;
mod message;
mod routes;
mod services;
mod state;

use config::Config;
use services::openai::OpenAiClient;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win either way.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let client = OpenAiClient::new(&config.openai_api_key, &config.openai_base_url);
    let state = Arc::new(AppState::new(Arc::new(client)));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("FitMind AI backend listening on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
