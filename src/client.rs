// ABOUTME: HTTP client for the Brewlog REST surface, used by the CLI front end
// ABOUTME: Wraps list/create/delete/rules requests and derives autocomplete suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

//! HTTP client for the configuration API
//!
//! Error envelopes from the server are surfaced with their original code and
//! message, so a 400 validation failure reads the same here as in a browser
//! client. Transport failures map to a single external-service error.

use crate::errors::{AppError, AppResult, ErrorResponse};
use crate::models::{CoffeeConfig, NewCoffeeConfig};
use crate::routes::configs::{CreateConfigResponse, DeleteConfigResponse};
use crate::validation::FieldRule;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Distinct brand/blend values derived from existing configs, offered as
/// autocomplete options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuggestionSets {
    /// Unique brand values, first-seen order
    pub brands: Vec<String>,
    /// Unique blend values, first-seen order
    pub blends: Vec<String>,
}

/// Derive suggestion sets from a config listing
#[must_use]
pub fn suggestion_sets(configs: &[CoffeeConfig]) -> SuggestionSets {
    let mut sets = SuggestionSets::default();
    for config in configs {
        if !sets.brands.contains(&config.brand) {
            sets.brands.push(config.brand.clone());
        }
        if !sets.blends.contains(&config.blend) {
            sets.blends.push(config.blend.clone());
        }
    }
    sets
}

/// Client for the Brewlog REST API
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given server base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// Fetch all stored configurations
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response
    pub async fn list_configs(&self) -> AppResult<Vec<CoffeeConfig>> {
        let response = self
            .http
            .get(format!("{}/api/configs", self.base_url))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    /// Submit a create request, returning the storage-assigned id
    ///
    /// # Errors
    ///
    /// Returns the server's validation error on 400, or a transport/storage
    /// error otherwise
    pub async fn create_config(&self, config: &NewCoffeeConfig) -> AppResult<i64> {
        let response = self
            .http
            .post(format!("{}/api/configs", self.base_url))
            .json(config)
            .send()
            .await
            .map_err(transport_error)?;
        let body: CreateConfigResponse = read_json(response).await?;
        Ok(body.id)
    }

    /// Delete a configuration by id, returning the confirmation message
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response
    pub async fn delete_config(&self, id: i64) -> AppResult<String> {
        let response = self
            .http
            .delete(format!("{}/api/configs/{id}", self.base_url))
            .send()
            .await
            .map_err(transport_error)?;
        let body: DeleteConfigResponse = read_json(response).await?;
        Ok(body.message)
    }

    /// Fetch the server's field-rule catalog
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response
    pub async fn fetch_rules(&self) -> AppResult<Vec<FieldRule>> {
        let response = self
            .http
            .get(format!("{}/api/configs/rules", self.base_url))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }

    /// Fetch configs and derive autocomplete suggestion sets
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success response
    pub async fn fetch_suggestions(&self) -> AppResult<SuggestionSets> {
        let configs = self.list_configs().await?;
        Ok(suggestion_sets(&configs))
    }
}

fn transport_error(e: reqwest::Error) -> AppError {
    AppError::external_service(format!("Failed to reach brewlog server: {e}"))
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::external_service(format!("Invalid response from server: {e}")))
    } else {
        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(AppError::new(body.code, body.error)),
            Err(_) => Err(AppError::external_service(format!(
                "Server returned {status}"
            ))),
        }
    }
}
