// ABOUTME: Name normalization route handler
// ABOUTME: Exposes the recipe name normalizer as POST /parse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::{constants::routes, errors::AppError, services::normalizer};
use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// `POST /parse` body
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Raw recipe name
    pub input: String,
}

/// `POST /parse` success body
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseResponse {
    /// Normalized name
    pub msg: String,
}

/// Name normalization routes
pub struct ParseRoutes;

impl ParseRoutes {
    /// Create the normalization route
    pub fn routes() -> Router {
        Router::new().route(routes::PARSE, post(Self::handle_parse))
    }

    async fn handle_parse(
        payload: Result<Json<ParseRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload.map_err(|e| AppError::invalid_input(e.body_text()))?;
        let msg = normalizer::normalize(&request.input)?;
        Ok(Json(ParseResponse { msg }).into_response())
    }
}
