// ABOUTME: HTTP server assembly and startup for the cookbook API
// ABOUTME: Merges route groups, applies the middleware stack, and serves with graceful shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cookbook Server
//!
//! Request flow, outermost first:
//!
//! 1. request id (`x-request-id` reused or generated)
//! 2. `http_request` trace span
//! 3. request timeout
//! 4. request body limit
//! 5. CORS
//! 6. route handler

/// Process lifecycle helpers
pub mod lifecycle;
/// Shared resource container
pub mod resources;

use crate::middleware::{make_request_span, record_response, request_id_middleware, setup_cors};
use crate::routes::{EntryRoutes, HealthRoutes, ParseRoutes, SummaryRoutes};
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, middleware, Router};
use lifecycle::shutdown_signal;
use resources::ServerResources;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

/// HTTP front end over the shared cookbook
pub struct CookbookServer {
    resources: Arc<ServerResources>,
}

impl CookbookServer {
    /// Create a server over shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Assemble every route group with the middleware stack
    #[must_use]
    pub fn router(&self) -> Router {
        let config = &self.resources.config;

        Router::new()
            .merge(ParseRoutes::routes())
            .merge(EntryRoutes::routes(Arc::clone(&self.resources)))
            .merge(SummaryRoutes::routes(Arc::clone(&self.resources)))
            .merge(HealthRoutes::routes(Arc::clone(&self.resources)))
            .layer(setup_cors(config))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.max_request_body_bytes))
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_request_span)
                    .on_response(record_response),
            )
            .layer(middleware::from_fn(request_id_middleware))
    }

    /// Bind the configured address and serve until shutdown is requested
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {address}"))?;

        info!("HTTP server listening on {}", address);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated with an error")?;

        info!("HTTP server stopped");
        Ok(())
    }
}
