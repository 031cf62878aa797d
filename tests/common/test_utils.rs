use super::mocks::{MockSentimentProvider, StubScorer};
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use mood_journal::{
    Result,
    analyzer::{BulkAnalyzer, MoodAnalyzer},
    config::{BulkConfig, Config, InferenceConfig, LogsConfig, ServerConfig},
    lexicon::{PolarityScorer, Thresholds},
    inference::SentimentProvider,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;
use tower::ServiceExt; // for `oneshot`

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        inference: InferenceConfig {
            api_url: "http://127.0.0.1:9/models/test".to_string(),
            api_token: Some("test-token".to_string()),
            timeout_secs: 5,
            degrade_on_error: true,
        },
        bulk: BulkConfig::default(),
    }
}

/// Build a router around the given provider and scorer
pub fn create_test_app(
    provider: MockSentimentProvider,
    scorer: impl PolarityScorer + 'static,
    degrade_on_error: bool,
) -> Router {
    build_app(Arc::new(provider), scorer, degrade_on_error)
}

/// Build a router and keep a handle on the provider to inspect its requests
pub fn create_recording_app(
    provider: MockSentimentProvider,
) -> (Router, Arc<MockSentimentProvider>) {
    let provider = Arc::new(provider);
    let app = build_app(provider.clone(), StubScorer::default(), true);
    (app, provider)
}

fn build_app(
    provider: Arc<dyn SentimentProvider>,
    scorer: impl PolarityScorer + 'static,
    degrade_on_error: bool,
) -> Router {
    let state = AppState {
        analyzer: Arc::new(MoodAnalyzer::new(provider, degrade_on_error)),
        bulk: Arc::new(BulkAnalyzer::new(Arc::new(scorer), Thresholds::default())),
    };
    server::router(state)
}

pub fn create_default_app() -> Router {
    create_test_app(
        MockSentimentProvider::new().with_prediction("POSITIVE", 0.95),
        StubScorer::default(),
        true,
    )
}

/// POST a JSON body and return status plus decoded body
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    decode(response).await
}

pub async fn decode(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

inference:
  api_url: "http://localhost:9000/models/sst2"
  api_token: "file-token"
  timeout_secs: 10
  degrade_on_error: false

bulk:
  positive_threshold: 0.3
  negative_threshold: -0.1
"#;

/// Minimal configuration relying on defaults
pub const MINIMAL_CONFIG_YAML: &str = r#"
server:
  port: 6000
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
