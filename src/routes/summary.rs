// ABOUTME: Recipe summary route handler
// ABOUTME: Flattens a registered recipe into cook time and base ingredient totals on GET /summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{
    constants::routes,
    errors::{AppError, ErrorCode},
    models::{IngredientSummary, RecipeSummary},
    server::resources::ServerResources,
};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `GET /summary` query string
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Recipe to flatten
    pub name: Option<String>,
}

/// `GET /summary` success body
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    /// Recipe name
    pub name: String,
    /// Total cook time across all base ingredients
    pub cook_time: u64,
    /// Base ingredients with aggregated quantities
    pub ingredients: Vec<IngredientSummary>,
}

impl From<RecipeSummary> for SummaryResponse {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            name: summary.name,
            cook_time: summary.cook_time,
            ingredients: summary.ingredients.into_values().collect(),
        }
    }
}

/// Recipe summary routes
pub struct SummaryRoutes;

impl SummaryRoutes {
    /// Create the summary route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::SUMMARY, get(Self::handle_summary))
            .with_state(resources)
    }

    async fn handle_summary(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<SummaryQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(query) = query.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let name = query.name.ok_or_else(|| {
            AppError::new(ErrorCode::MissingRequiredField, "Missing name query parameter")
        })?;

        let summary = resources.store.summarize(&name).await?;
        Ok(Json(SummaryResponse::from(summary)).into_response())
    }
}
