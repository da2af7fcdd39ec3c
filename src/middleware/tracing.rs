// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the per-request span used by the HTTP trace layer and records response outcomes

use super::request_id::RequestId;
use crate::logging::AppLogger;
use axum::{extract::Request, response::Response};
use std::time::Duration;
use tracing::Span;

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = tracing::field::Empty,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Span factory for `TraceLayer::make_span_with`
pub fn make_request_span(request: &Request) -> Span {
    let span = create_request_span(request.method().as_str(), request.uri().path());
    if let Some(request_id) = request.extensions().get::<RequestId>() {
        span.record("request_id", request_id.as_str());
    }
    span
}

/// Response hook for `TraceLayer::on_response`
pub fn record_response(response: &Response, latency: Duration, span: &Span) {
    let status = response.status().as_u16();
    let duration_ms = latency.as_millis() as u64;
    span.record("status_code", status);
    span.record("duration_ms", duration_ms);
    AppLogger::log_api_request(status, duration_ms);
}
