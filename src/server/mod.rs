pub mod handlers;
mod types;

pub use types::ErrorResponse;

use crate::{
    Result,
    analyzer::{BulkAnalyzer, MoodAnalyzer},
    config::Config,
    inference::HuggingFaceClient,
    lexicon::{AfinnScorer, Thresholds},
};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

pub fn router(state: handlers::AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/analyze/bulk", post(handlers::analyze_bulk))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn build_state(config: &Config) -> Result<handlers::AppState> {
    if config.inference.api_token.is_none() {
        warn!("HUGGINGFACE_API_TOKEN is not set; inference requests will be rejected by the provider");
    }

    let provider = HuggingFaceClient::new(config.inference.clone())?;
    let analyzer = MoodAnalyzer::new(Arc::new(provider), config.inference.degrade_on_error);

    let bulk = BulkAnalyzer::new(Arc::new(AfinnScorer), Thresholds::from(&config.bulk));

    Ok(handlers::AppState {
        analyzer: Arc::new(analyzer),
        bulk: Arc::new(bulk),
    })
}

pub async fn run(config: Config) -> Result<()> {
    let app = router(build_state(&config)?);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
