// ABOUTME: Route module organization for the cookbook HTTP API
// ABOUTME: Each route group owns its handlers and builds an axum Router over shared resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP route groups
//!
//! - `/parse`: recipe name normalization
//! - `/entry`: ingredient and recipe registration
//! - `/summary`: flattened recipe summaries
//! - `/health`: liveness

/// Entry registration routes
pub mod entries;
/// Health check routes
pub mod health;
/// Name normalization routes
pub mod parse;
/// Recipe summary routes
pub mod summary;

pub use entries::EntryRoutes;
pub use health::HealthRoutes;
pub use parse::{ParseRequest, ParseResponse, ParseRoutes};
pub use summary::{SummaryQuery, SummaryResponse, SummaryRoutes};
