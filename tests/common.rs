// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, an assembled router, and request/response helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `cookbook_server`

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use cookbook_server::{
    config::ServerConfig,
    models::EntryRequest,
    server::{resources::ServerResources, CookbookServer},
    store::{Cookbook, EntryStore},
};
use serde_json::Value;
use std::sync::{Arc, Once};
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Resources over an empty cookbook with default configuration
pub fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(Arc::new(ServerConfig::default())))
}

/// Fully layered router plus a handle on its store
pub fn create_test_app() -> (Router, EntryStore) {
    let resources = create_test_resources();
    let store = resources.store.clone();
    (CookbookServer::new(resources).router(), store)
}

/// Cookbook with every request registered, panicking on the first rejection
pub fn cookbook_from(requests: Vec<EntryRequest>) -> Cookbook {
    let mut cookbook = Cookbook::new();
    for request in requests {
        cookbook_server::services::registration::register(&mut cookbook, request).unwrap();
    }
    cookbook
}

/// Response status and raw body
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Drive one request through the router
pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}

/// `POST` a JSON value
pub async fn post_json(app: &Router, uri: &str, body: &Value) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// `GET` a URI
pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// `POST /parse`
pub async fn parse(app: &Router, input: &str) -> TestResponse {
    post_json(app, "/parse", &serde_json::json!({ "input": input })).await
}

/// `POST /entry`
pub async fn post_entry(app: &Router, entry: &Value) -> TestResponse {
    post_json(app, "/entry", entry).await
}

/// `GET /summary?name=...` with the name form-encoded
pub async fn get_summary(app: &Router, name: &str) -> TestResponse {
    let query = serde_urlencoded::to_string([("name", name)]).unwrap();
    get(app, &format!("/summary?{query}")).await
}
