//! Request logging middleware.
//!
//! Emits one structured log line per request with method, path, status
//! and duration.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

use super::request_id::RequestId;

/// Log each request after it completes.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();

    let start = Instant::now();
    let response = next.run(request).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms,
        request_id = %request_id,
        "request completed"
    );

    response
}
