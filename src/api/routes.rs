//! HTTP routes

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::middleware::process_time;
use super::state::AppState;
use super::API_PREFIX;

/// Create the application router
///
/// # Routes
///
/// - `GET /` - Service description
/// - `GET /health` - Liveness probe, never loads the model
/// - `POST /api/v1/analyze-text` - Analyze one text
/// - `POST /api/v1/batch-analyze` - Analyze up to `max_batch_size` texts
/// - `GET /api/v1/health` - Health including model availability
/// - `GET /api/v1/model-info` - Loaded model description
///
/// Anything else gets a JSON 404.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/analyze-text", post(handlers::analyze_text))
        .route("/batch-analyze", post(handlers::batch_analyze))
        .route("/health", get(handlers::health))
        .route("/model-info", get(handlers::model_info));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::liveness))
        .nest(API_PREFIX, api)
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(process_time))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
