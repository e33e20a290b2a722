//! HTTP API
//!
//! axum router over the analysis pipeline. Handlers validate input, then run
//! the pipeline on the blocking pool with the process-wide classifier.

mod error;
mod handlers;
mod middleware;
mod routes;
mod state;

pub use error::ApiError;
pub use handlers::{AnalysisData, AnalysisResponse, AnalyzeRequest, BatchResponse};
pub use middleware::PROCESS_TIME_HEADER;
pub use routes::create_router;
pub use state::AppState;

use anyhow::{Context, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ServerConfig;

/// Prefix for the versioned API routes
pub const API_PREFIX: &str = "/api/v1";
pub const SERVICE_NAME: &str = "MindCare - Text Analysis";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bind `config.bind_addr()` and serve until Ctrl-C
pub async fn serve(state: Arc<AppState>, config: &ServerConfig, preload: bool) -> Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("{}", "=".repeat(60));
    info!("{} v{} starting up", SERVICE_NAME, VERSION);
    info!("{}", "=".repeat(60));

    if preload {
        state.classifier.preload().await;
    } else {
        info!("Model preload disabled; loading on first request");
    }

    info!("Endpoints:");
    info!("  POST {API_PREFIX}/analyze-text");
    info!("  POST {API_PREFIX}/batch-analyze");
    info!("  GET  {API_PREFIX}/health");
    info!("  GET  {API_PREFIX}/model-info");
    info!("Listening on http://{}", listener.local_addr()?);

    serve_with_shutdown(listener, state, async {
        tokio::signal::ctrl_c().await.ok();
    })
    .await?;

    info!("{} shut down", SERVICE_NAME);
    Ok(())
}

/// Serve on an already-bound listener until `shutdown` resolves
pub async fn serve_with_shutdown<F>(listener: TcpListener, state: Arc<AppState>, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let router = create_router(state);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;
    Ok(())
}
