// ABOUTME: Server binary for the Brewlog configuration service
// ABOUTME: Loads environment config, opens the database, and serves the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

//! # Brewlog Server Binary
//!
//! Starts the coffee configuration REST API with SQLite persistence.

use anyhow::Result;
use brewlog_server::{
    config::ServerConfig,
    database::Database,
    logging,
    server::{HttpServer, ServerResources},
};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "brewlog-server")]
#[command(about = "Brewlog - coffee brewing configuration service")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Apply command-line overrides
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    logging::init_from_env()?;

    info!("Starting Brewlog configuration service");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!(
        "Database initialized successfully: {}",
        database.backend_info()
    );

    let resources = Arc::new(ServerResources::new(database));
    HttpServer::new(resources, config).run().await
}
