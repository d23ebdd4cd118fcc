// ABOUTME: Route module organization for Brewlog HTTP endpoints
// ABOUTME: Each domain module contains route definitions and thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

//! Route modules
//!
//! Each module contains only route definitions and thin handler functions
//! that delegate to the service layer.

/// Configuration CRUD and validation-rule catalog routes
pub mod configs;
/// Health check and system status routes
pub mod health;

/// Configuration route handlers
pub use configs::ConfigRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
