//! Route handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, warn};

use super::error::ApiError;
use super::state::AppState;
use super::{API_PREFIX, SERVICE_NAME, VERSION};
use crate::analysis::round_to;
use crate::models::{AnalysisResult, DEFAULT_EMOTIONS};

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Analysis result plus request metadata
#[derive(Debug, Serialize)]
pub struct AnalysisData {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub user_id: Option<String>,
    /// Unix seconds
    pub timestamp: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub data: Option<AnalysisData>,
    pub error: Option<String>,
    /// Seconds, 3 decimals
    pub processing_time: f64,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub success: bool,
    pub count: usize,
    pub results: Vec<AnalysisResult>,
}

fn elapsed_secs(start: Instant) -> f64 {
    round_to(start.elapsed().as_secs_f64(), 3)
}

fn unix_timestamp() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

fn check_length(text: &str, max: usize) -> Result<(), ApiError> {
    let len = text.chars().count();
    if len == 0 || len > max {
        return Err(ApiError::TextLength { len, max });
    }
    Ok(())
}

/// POST /api/v1/analyze-text
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let start = Instant::now();
    let Json(request) = payload?;

    check_length(&request.text, state.max_text_length)?;
    let text = request.text.trim().to_string();
    if text.is_empty() {
        return Err(ApiError::EmptyText);
    }

    let response = match state.analyze(text).await {
        Ok(result) => AnalysisResponse {
            success: true,
            data: Some(AnalysisData {
                result,
                user_id: request.user_id,
                timestamp: unix_timestamp(),
            }),
            error: None,
            processing_time: elapsed_secs(start),
        },
        Err(e) => {
            error!("Text analysis failed: {}", e);
            AnalysisResponse {
                success: false,
                data: None,
                error: Some(e.to_string()),
                processing_time: elapsed_secs(start),
            }
        }
    };
    Ok(Json(response))
}

/// POST /api/v1/batch-analyze
pub async fn batch_analyze(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Vec<String>>, JsonRejection>,
) -> Result<Json<BatchResponse>, ApiError> {
    let Json(texts) = payload?;
    if texts.len() > state.max_batch_size {
        return Err(ApiError::BatchTooLarge(state.max_batch_size));
    }

    let texts: Vec<String> = texts.into_iter().filter(|t| !t.trim().is_empty()).collect();
    for text in &texts {
        check_length(text, state.max_text_length)?;
    }

    let results = state.analyze_batch(texts).await?;
    Ok(Json(BatchResponse {
        success: true,
        count: results.len(),
        results,
    }))
}

/// GET /api/v1/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let model_loaded = match state.classifier.get().await {
        Ok(_) => true,
        Err(e) => {
            warn!("Health check could not load model: {}", e);
            false
        }
    };
    let status = if model_loaded { "healthy" } else { "degraded" };
    Json(json!({
        "status": status,
        "service": SERVICE_NAME,
        "version": VERSION,
        "model_loaded": model_loaded,
    }))
}

/// GET /api/v1/model-info
pub async fn model_info(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let classifier = state.classifier.get().await?;
    let info = classifier.info();
    Ok(Json(json!({
        "model_type": info.model_type,
        "model_name": info.model_name,
        "emotions": info.labels,
        "num_emotions": info.labels.len(),
        "device": info.device,
        "parameters": info.parameters,
        "max_length": info.max_length,
    })))
}

/// GET /
pub async fn root(State(state): State<Arc<AppState>>) -> Json<Value> {
    let endpoint = |path: &str, method: &str, description: &str| {
        json!({ "path": format!("{API_PREFIX}{path}"), "method": method, "description": description })
    };
    Json(json!({
        "message": "Welcome to MindCare - Text Wellness Analysis API",
        "service": SERVICE_NAME,
        "version": VERSION,
        "status": "running",
        "endpoints": {
            "analyze_text": endpoint(
                "/analyze-text",
                "POST",
                "Analyze text for emotion and wellness indicators",
            ),
            "batch_analyze": endpoint(
                "/batch-analyze",
                "POST",
                &format!("Analyze multiple texts at once (max {})", state.max_batch_size),
            ),
            "health_check": endpoint("/health", "GET", "Check API health and model status"),
            "model_info": endpoint("/model-info", "GET", "Get information about the emotion model"),
        },
        "features": [
            "Text emotion classification",
            "Sentiment analysis (-1 to +1)",
            "Linguistic feature extraction",
            "Wellness score calculation (0-10)",
            "Batch processing support",
        ],
        "emotions": DEFAULT_EMOTIONS,
    }))
}

/// GET /health (never touches the model)
pub async fn liveness() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "MindCare API",
        "version": VERSION,
        "uptime": "running",
    }))
}

/// Fallback for unknown routes
pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Endpoint not found",
            "message": format!("The endpoint '{}' does not exist.", uri.path()),
            "suggestion": "GET / lists the available endpoints",
        })),
    )
}
