// ABOUTME: HTTP middleware for the Brewlog server
// ABOUTME: Currently CORS; request tracing comes from tower-http's TraceLayer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

/// CORS configuration for web client access
pub mod cors;
