// ABOUTME: Entry registration route handler
// ABOUTME: Accepts ingredients and recipes on POST /entry and stores them in the shared cookbook
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Entry registration routes
//!
//! A successful registration answers `200` with an empty body. Every
//! validation failure answers `400` with a plain-text reason.

use crate::{
    constants::routes, errors::AppError, models::EntryRequest,
    server::resources::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

/// Entry registration routes
pub struct EntryRoutes;

impl EntryRoutes {
    /// Create the registration route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::ENTRY, post(Self::handle_register))
            .with_state(resources)
    }

    async fn handle_register(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<EntryRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload.map_err(|e| AppError::invalid_input(e.body_text()))?;
        resources.store.register(request).await?;
        Ok(StatusCode::OK.into_response())
    }
}
