// ABOUTME: HTTP server assembly - shared resources, router construction, serving
// ABOUTME: Merges domain routers, applies CORS and request tracing, binds the listener
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

//! HTTP server assembly
//!
//! [`ServerResources`] holds everything route handlers share (the database);
//! handlers receive it as `Arc` state so each request works against the same
//! pool with no other shared mutable in-process state.

use crate::config::ServerConfig;
use crate::database::Database;
use crate::middleware::cors::setup_cors;
use crate::routes::{ConfigRoutes, HealthRoutes};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared server resources passed to route handlers
pub struct ServerResources {
    /// Database manager owning the connection pool
    pub database: Database,
}

impl ServerResources {
    /// Create new server resources
    #[must_use]
    pub const fn new(database: Database) -> Self {
        Self { database }
    }
}

/// The Brewlog HTTP server
pub struct HttpServer {
    resources: Arc<ServerResources>,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a server over shared resources and configuration
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>, config: ServerConfig) -> Self {
        Self { resources, config }
    }

    /// Assemble the full application router
    #[must_use]
    pub fn router(&self) -> Router {
        Router::new()
            .merge(ConfigRoutes::routes(self.resources.clone()))
            .merge(HealthRoutes::routes())
            .layer(setup_cors(&self.config))
            .layer(TraceLayer::new_for_http())
    }

    /// Bind and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind the configured address
    pub async fn run(self) -> Result<()> {
        let addr = format!("{}:{}", self.config.http_host, self.config.http_port);
        let router = self.router();

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        info!("HTTP server listening on {addr}");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server terminated")?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received, stopping server");
    }
}
