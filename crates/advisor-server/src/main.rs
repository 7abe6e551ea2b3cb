//! fund-advisor HTTP Server
//!
//! Axum-based REST API over the recommendation engine and fund screener.

mod config;
mod handlers;
mod state;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::handlers::{compare_funds, health_check, list_funds, list_questions, recommend};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    let state = AppState::default();
    tracing::info!(funds = state.funds.len(), "Fund catalog loaded");

    // CORS configuration
    let cors = match config.cors_origin.as_deref() {
        Some(origin) => CorsLayer::new().allow_origin(origin.parse::<HeaderValue>()?),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods(Any)
    .allow_headers(Any);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/questions", get(list_questions))
        .route("/api/recommend", post(recommend))
        .route("/api/funds", get(list_funds))
        .route("/api/funds/compare", post(compare_funds))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("fund-advisor server running on http://{}", config.bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health             - Health check");
    tracing::info!("  GET  /api/questions      - Risk questionnaire");
    tracing::info!("  POST /api/recommend      - Build a fund basket");
    tracing::info!("  GET  /api/funds          - Screen the catalog");
    tracing::info!("  POST /api/funds/compare  - Compare up to 4 funds");

    axum::serve(listener, app).await?;

    Ok(())
}
