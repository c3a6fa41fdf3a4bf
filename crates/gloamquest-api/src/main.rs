//! Gloamquest API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use gloamquest_api::error::AppError;
use gloamquest_api::{routes, state};
use gloamquest_openai::{OpenAiConfig, OpenAiGenerator};

const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Gloamquest API server");

    // Read configuration from environment once; everything downstream gets
    // it injected.
    let api_key = std::env::var("OPENAI_API_KEY")
        .map_err(|_| AppError::Config("OPENAI_API_KEY environment variable must be set".into()))?;
    let base_url =
        std::env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_OPENAI_URL.to_string());
    let model = std::env::var("GLOAMQUEST_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;

    let generator = OpenAiGenerator::new(OpenAiConfig {
        base_url,
        api_key,
        model,
    })?;
    let app_state = state::AppState::new(Arc::new(generator));

    // Build router.
    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::generate::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
