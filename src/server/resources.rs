// ABOUTME: Centralized resource container for dependency injection in the cookbook server
// ABOUTME: Shares the entry store and configuration across every route group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Created once at startup and handed to each route group behind an `Arc`.

use crate::config::ServerConfig;
use crate::store::EntryStore;
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Shared cookbook; cloning shares the same underlying entries
    pub store: EntryStore,
    /// Immutable runtime configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Create resources over an empty cookbook
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self::with_store(EntryStore::new(), config)
    }

    /// Create resources over an existing store
    #[must_use]
    pub fn with_store(store: EntryStore, config: Arc<ServerConfig>) -> Self {
        Self { store, config }
    }
}
