// ABOUTME: Test helper modules shared across integration tests
// ABOUTME: Houses the axum oneshot request helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors
#![allow(dead_code)]

pub mod axum_test;
