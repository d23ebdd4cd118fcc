// ABOUTME: Route handlers for the coffee configuration REST API
// ABOUTME: Exposes list, create, delete, and the validation-rule catalog under /api/configs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

//! Configuration routes
//!
//! Thin handlers translating HTTP to [`ConfigService`] calls. Error-to-status
//! mapping comes from `AppError`: validation failures produce 400, storage
//! failures 500, both as a JSON `{error, code}` envelope.

use crate::database::configs::ConfigsManager;
use crate::errors::AppError;
use crate::models::NewCoffeeConfig;
use crate::server::ServerResources;
use crate::services::configs::ConfigService;
use crate::validation;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response for a successful create
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateConfigResponse {
    /// Storage-assigned identifier of the new record
    pub id: i64,
}

/// Response for a completed delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteConfigResponse {
    /// Confirmation message
    pub message: String,
}

/// Configuration routes handler
pub struct ConfigRoutes;

impl ConfigRoutes {
    /// Create all configuration routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/configs", get(Self::handle_list))
            .route("/api/configs", post(Self::handle_create))
            .route("/api/configs/rules", get(Self::handle_rules))
            .route("/api/configs/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Build the service over the shared pool
    fn service(resources: &Arc<ServerResources>) -> ConfigService {
        ConfigService::new(ConfigsManager::new(resources.database.pool().clone()))
    }

    /// Handle GET /api/configs - list all stored configurations
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let configs = Self::service(&resources).get_all_configs().await?;
        Ok((StatusCode::OK, Json(configs)).into_response())
    }

    /// Handle POST /api/configs - validate and persist a configuration
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<NewCoffeeConfig>,
    ) -> Result<Response, AppError> {
        let id = Self::service(&resources).save_config(&body).await?;
        Ok((StatusCode::CREATED, Json(CreateConfigResponse { id })).into_response())
    }

    /// Handle DELETE /api/configs/:id - delete by id
    ///
    /// Responds 200 even when the id is absent; the stored set already
    /// lacks it.
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        Self::service(&resources).delete_config(id).await?;
        Ok((
            StatusCode::OK,
            Json(DeleteConfigResponse {
                message: "Config deleted successfully".to_owned(),
            }),
        )
            .into_response())
    }

    /// Handle GET /api/configs/rules - serve the field-rule catalog
    ///
    /// The serialized source of truth for clients; their local checks are
    /// advisory copies of this catalog.
    async fn handle_rules() -> Result<Response, AppError> {
        Ok((StatusCode::OK, Json(validation::form_rules())).into_response())
    }
}
