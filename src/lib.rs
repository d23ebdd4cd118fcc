// ABOUTME: Main library entry point for the Brewlog coffee configuration service
// ABOUTME: Provides a REST API, SQLite persistence, and shared validation rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

#![deny(unsafe_code)]

//! # Brewlog Server
//!
//! A small single-user service for recording and browsing coffee brewing
//! configurations (brand, blend, weight, grind, water temperature, brew time,
//! notes), persisted in SQLite and exposed over a REST endpoint.
//!
//! ## Architecture
//!
//! The server follows a three-layer design:
//! - **Routes**: thin axum handlers translating HTTP to service calls
//! - **Services**: business rules (required fields, numeric ranges)
//! - **Repository**: the only component touching storage
//!
//! Field constraints live in one place ([`validation`]) and are served to
//! clients as a JSON catalog, so the client copy is purely advisory while the
//! server remains the source of truth.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use brewlog_server::config::ServerConfig;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Brewlog server configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary crates (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access them.

/// HTTP client for the REST surface, used by the CLI front end
pub mod client;

/// Environment-based configuration management
pub mod config;

/// SQLite database management and the configuration repository
pub mod database;

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// HTTP middleware (CORS)
pub mod middleware;

/// Core data models for brewing configurations
pub mod models;

/// HTTP routes for configuration CRUD and health checks
pub mod routes;

/// HTTP server assembly and shared resources
pub mod server;

/// Domain service layer enforcing persistence policy
pub mod services;

/// Field validation rules shared by server and clients
pub mod validation;
