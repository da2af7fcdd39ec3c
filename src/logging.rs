// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels, formatters, and domain events for registration and resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Production-ready logging configuration with structured output

use crate::config::environment::{Environment, LogLevel};
use crate::constants::{env_config, service_names};
use crate::models::{EntryId, RecipeSummary};
use crate::services::resolver::FailureCause;
use anyhow::Result;
use serde_json::json;
use std::env;
use std::io;
use tracing::{debug, info, warn};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Application log level
    pub level: LogLevel,
    /// Raw `RUST_LOG` directives; replace `level` when present
    pub directives: Option<String>,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span information for tracing
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment
    pub environment: Environment,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse the `LOG_FORMAT` value, falling back to pretty output
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            directives: None,
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::COOKBOOK_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: Environment::default(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source
    ///
    /// `LOG_LEVEL` and `ENVIRONMENT` are parsed exactly as
    /// [`ServerConfig::from_env`](crate::config::ServerConfig::from_env) parses them.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let level = LogLevel::from_str_or_default(
            lookup(env_config::LOG_LEVEL).as_deref().unwrap_or("info"),
        );
        let format = LogFormat::from_str_or_default(lookup("LOG_FORMAT").as_deref().unwrap_or(""));
        let environment = Environment::from_str_or_default(
            lookup(env_config::ENVIRONMENT)
                .as_deref()
                .unwrap_or("development"),
        );

        // In production, use more detailed logging
        let is_production = environment.is_production();

        Self {
            level,
            directives: lookup("RUST_LOG").filter(|directives| !directives.trim().is_empty()),
            format,
            include_location: is_production || lookup("LOG_INCLUDE_LOCATION").is_some(),
            include_thread: is_production || lookup("LOG_INCLUDE_THREAD").is_some(),
            include_spans: is_production || lookup("LOG_INCLUDE_SPANS").is_some(),
            service_name: lookup("SERVICE_NAME")
                .unwrap_or_else(|| service_names::COOKBOOK_SERVER.into()),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Build the filter: `RUST_LOG` or the configured level, plus noise reduction
    fn env_filter(&self) -> EnvFilter {
        let base = self.directives.as_deref().map_or_else(
            || EnvFilter::new(self.level.to_string()),
            EnvFilter::new,
        );

        base.add_directive(
            "hyper=warn"
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        )
        .add_directive(
            "hyper::proto=warn"
                .parse()
                .unwrap_or_else(|_| tracing::Level::WARN.into()),
        )
        .add_directive(
            "tower_http=info"
                .parse()
                .unwrap_or_else(|_| tracing::Level::INFO.into()),
        )
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .with_target(false)
                    .with_writer(io::stdout)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.directives = self.directives.as_deref().unwrap_or_default(),
            log.format = ?self.format,
            "Cookbook server starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment.to_string()
            },
            "logging": {
                "level": self.level.to_string(),
                "directives": self.directives,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Configuration loaded: {}", config_summary);
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log a successful registration
    pub fn log_entry_registered(id: &EntryId) {
        info!(
            entry.name = %id.name,
            entry.kind = %id.kind,
            "Entry registered"
        );
    }

    /// Log a flattened recipe
    pub fn log_recipe_resolved(summary: &RecipeSummary, duration_ms: u64) {
        info!(
            recipe.name = %summary.name,
            recipe.cook_time = summary.cook_time,
            recipe.ingredients = summary.ingredients.len(),
            resolve.duration_ms = duration_ms,
            "Recipe resolved"
        );
    }

    /// Log why a recipe could not be flattened; clients only see a generic failure
    pub fn log_resolution_failed(name: &str, cause: &FailureCause, duration_ms: u64) {
        warn!(
            recipe.name = %name,
            resolve.cause = %cause,
            resolve.duration_ms = duration_ms,
            "Recipe resolution failed"
        );
    }

    /// Log a finished `API` request; method, path and request id come from the enclosing span
    pub fn log_api_request(status: u16, duration_ms: u64) {
        if status >= 500 {
            warn!(
                http.status = %status,
                http.duration_ms = %duration_ms,
                "HTTP request"
            );
        } else {
            debug!(
                http.status = %status,
                http.duration_ms = %duration_ms,
                "HTTP request"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
        assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
        assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert_eq!(config.service_name, service_names::COOKBOOK_SERVER);
        assert!(!config.include_spans);
    }

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: Vec<(String, String)> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key: &str| {
            vars.iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        }
    }

    #[test]
    fn test_log_level_drives_the_filter() {
        let config = LoggingConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "debug")]));
        assert_eq!(config.level, LogLevel::Debug);
        assert!(config.directives.is_none());
        assert_eq!(
            config.env_filter().max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_rust_log_overrides_log_level() {
        let config = LoggingConfig::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "debug"),
            ("RUST_LOG", "warn"),
        ]));
        assert_eq!(config.directives.as_deref(), Some("warn"));
        assert_eq!(config.env_filter().max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_environment_aliases_match_server_config() {
        let config = LoggingConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "prod")]));
        assert_eq!(config.environment, Environment::Production);
        assert!(config.include_location);
        assert!(config.include_spans);

        let config = LoggingConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.environment, Environment::Development);
        assert!(!config.include_location);
        assert_eq!(config.level, LogLevel::Info);
    }
}
