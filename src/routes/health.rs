// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness and the number of registered cookbook entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Health check routes for service monitoring

use crate::{
    constants::{routes, service_names},
    server::resources::ServerResources,
};
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::HEALTH, get(Self::handle_health))
            .with_state(resources)
    }

    async fn handle_health(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "service": service_names::COOKBOOK_SERVER,
            "entries": resources.store.len().await,
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }
}
