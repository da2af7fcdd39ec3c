// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for routes, ports, environment variables, and limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Service identification
pub mod service_names {
    /// Name reported in logs and the health endpoint
    pub const COOKBOOK_SERVER: &str = "cookbook-server";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
}

/// API routes
pub mod routes {
    /// Name normalization route
    pub const PARSE: &str = "/parse";
    /// Entry registration route
    pub const ENTRY: &str = "/entry";
    /// Recipe summary route
    pub const SUMMARY: &str = "/summary";
    /// Health route
    pub const HEALTH: &str = "/health";
}

/// Environment variable names read at startup
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP listen address
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Application log level
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Comma separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Maximum accepted request body size
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
}

/// Default values used when the environment is silent
pub mod defaults {
    /// Default listen address
    pub const HOST: &str = "127.0.0.1";
    /// Default CORS policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Request limits
pub mod limits {
    /// Default per-request timeout in seconds
    pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Default maximum request body size (1 MiB)
    pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
}
