use super::types::ErrorResponse;
use crate::{
    Error,
    analyzer::{
        AnalysisRequest, AnalysisResponse, BulkAnalyzer, BulkRequest, BulkResponse, MoodAnalyzer,
    },
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<MoodAnalyzer>,
    pub bulk: Arc<BulkAnalyzer>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: impl Into<String>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn map_error(e: Error) -> HandlerError {
    match e {
        Error::Validation(msg) => {
            warn!("Rejected request: {}", msg);
            error_response(StatusCode::BAD_REQUEST, msg)
        }
        e if e.is_upstream() => {
            error!("Inference provider failure: {}", e);
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
        e => {
            error!("Failed to process request: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn reject_body(rejection: JsonRejection) -> HandlerError {
    warn!("Invalid request body: {}", rejection.body_text());
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, HandlerError> {
    let Json(request) = payload.map_err(reject_body)?;
    info!("Received analyze request");

    state
        .analyzer
        .analyze(request.text.as_deref())
        .await
        .map(Json)
        .map_err(map_error)
}

pub async fn analyze_bulk(
    State(state): State<AppState>,
    payload: Result<Json<BulkRequest>, JsonRejection>,
) -> Result<Json<BulkResponse>, HandlerError> {
    let Json(request) = payload.map_err(reject_body)?;
    info!(
        "Received bulk analyze request with {} entries",
        request.entries.as_ref().map_or(0, Vec::len)
    );

    state
        .bulk
        .analyze(request.entries.as_deref())
        .map(Json)
        .map_err(map_error)
}
