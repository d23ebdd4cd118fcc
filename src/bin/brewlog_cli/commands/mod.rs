// ABOUTME: Command implementations for the Brewlog CLI
// ABOUTME: One module per command group
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

/// Configuration commands: add, list, delete, suggest, rules
pub mod config;
