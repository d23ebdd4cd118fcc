// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: The single place persistence policy is enforced server-side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

//! Domain service layer
//!
//! Business logic extracted from route handlers, reusable from any entry
//! point. Policy (required fields, numeric ranges) is enforced here, at the
//! trust boundary, regardless of what any client checked.

/// Configuration lifecycle: validation policy and persistence wrapping
pub mod configs;
