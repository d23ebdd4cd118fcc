// ABOUTME: Integration tests for the health check routes
// ABOUTME: Verifies liveness and readiness endpoints respond with status payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

#![allow(missing_docs, clippy::unwrap_used)]

mod helpers;

use axum::http::StatusCode;
use brewlog_server::routes::HealthRoutes;
use helpers::axum_test::AxumTestRequest;

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let response = AxumTestRequest::get("/health")
        .send(HealthRoutes::routes())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn ready_endpoint_reports_ready() {
    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
}
