// ABOUTME: Main library entry point for the cookbook API server
// ABOUTME: Wires name normalization, entry registration, and recipe resolution behind an HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookbook Server
//!
//! An in-memory cookbook of ingredients and recipes, served over HTTP.
//!
//! ## Features
//!
//! - **Name normalization**: turn free-form recipe names into a canonical form
//! - **Entry registration**: validate and store ingredients and recipes
//! - **Recipe summaries**: flatten nested recipes into total cook time and
//!   base ingredient quantities
//!
//! ## Architecture
//!
//! - **`cookbook-core`**: domain models, error types and constants
//! - **Services**: normalizer, registration and resolver logic
//! - **Store**: the shared, lock-guarded cookbook
//! - **Routes**: axum route groups over shared [`server::resources::ServerResources`]
//! - **Server**: middleware stack and lifecycle
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use cookbook_server::config::environment::ServerConfig;
//! use cookbook_server::server::{resources::ServerResources, CookbookServer};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let resources = Arc::new(ServerResources::new(config));
//!     CookbookServer::new(resources).run().await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Logging configuration and structured domain events
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP route groups
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Normalization, registration and resolution logic
pub mod services;

/// Shared cookbook storage
pub mod store;

// Foundation types live in the core crate; re-exported so paths read `crate::errors::...`
pub use cookbook_core::{constants, errors, models};
