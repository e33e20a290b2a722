//! Request timing

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::info;

pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Adds `X-Process-Time` (seconds) to every response and logs one line per request
pub async fn process_time(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let mut response = next.run(request).await;

    let elapsed = start.elapsed().as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&elapsed.to_string()) {
        response.headers_mut().insert(PROCESS_TIME_HEADER, value);
    }
    info!(
        "{} {} - Status: {} - Time: {:.3}s",
        method,
        path,
        response.status().as_u16(),
        elapsed
    );
    response
}
