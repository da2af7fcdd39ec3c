// ABOUTME: Server binary for the cookbook API
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP routes until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cookbook Server Binary
//!
//! Starts the HTTP API for registering ingredients and recipes and
//! summarizing recipes.

use anyhow::Result;
use clap::Parser;
use cookbook_server::{
    config::environment::ServerConfig,
    constants::routes,
    logging,
    server::{resources::ServerResources, CookbookServer},
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "cookbook-server")]
#[command(about = "Cookbook API - register ingredients and recipes, summarize recipes")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override listen address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging first so configuration loading is visible
    logging::init_from_env()?;

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    info!("Starting Cookbook API");
    info!("{}", config.summary());

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(Arc::new(config)));
    let server = CookbookServer::new(resources);

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("   Parse Name:        POST http://{host}:{port}{}", routes::PARSE);
    info!("   Register Entry:    POST http://{host}:{port}{}", routes::ENTRY);
    info!("   Recipe Summary:    GET  http://{host}:{port}{}?name=...", routes::SUMMARY);
    info!("   Health:            GET  http://{host}:{port}{}", routes::HEALTH);
    info!("=== End of Endpoint List ===");
}
