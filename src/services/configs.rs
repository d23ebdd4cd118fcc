// ABOUTME: Configuration business logic between routes and the repository
// ABOUTME: Enforces required-field and numeric-range policy, wraps storage failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

use crate::database::configs::ConfigsManager;
use crate::errors::{AppError, AppResult};
use crate::models::{CoffeeConfig, NewCoffeeConfig};
use crate::validation;
use tracing::warn;

/// Configuration service
///
/// Storage failures are wrapped in generic messages; internal storage detail
/// never reaches a client.
#[derive(Clone)]
pub struct ConfigService {
    manager: ConfigsManager,
}

impl ConfigService {
    /// Create a service over a repository
    #[must_use]
    pub const fn new(manager: ConfigsManager) -> Self {
        Self { manager }
    }

    /// Fetch every stored configuration
    ///
    /// # Errors
    ///
    /// Returns a generic database error if the repository fails
    pub async fn get_all_configs(&self) -> AppResult<Vec<CoffeeConfig>> {
        self.manager.find_all().await.map_err(|e| {
            warn!("listing configurations failed: {e}");
            AppError::database("Failed to fetch configurations")
        })
    }

    /// Validate and persist a configuration, returning the new id
    ///
    /// Policy runs before any storage access: a request with an empty brand
    /// or blend, or a numeric field outside its rule's range, performs no
    /// write.
    ///
    /// # Errors
    ///
    /// Returns a validation error for policy violations, or a generic
    /// database error if the repository fails
    pub async fn save_config(&self, config: &NewCoffeeConfig) -> AppResult<i64> {
        let failures = validation::check_config(config);

        if failures
            .iter()
            .any(|f| f.field == "brand" || f.field == "blend")
        {
            return Err(AppError::missing_required_field(
                "Brand and blend are required",
            ));
        }
        if let Some(failure) = failures.first() {
            return Err(AppError::value_out_of_range(failure.message.clone()));
        }

        self.manager.save(config).await.map_err(|e| {
            warn!("saving configuration failed: {e}");
            AppError::database("Failed to save configuration")
        })
    }

    /// Delete a configuration by id
    ///
    /// Deleting an absent id is a success: the stored set already lacks it.
    ///
    /// # Errors
    ///
    /// Returns a generic database error if the repository fails
    pub async fn delete_config(&self, id: i64) -> AppResult<()> {
        self.manager.delete(id).await.map_err(|e| {
            warn!("deleting configuration {id} failed: {e}");
            AppError::database("Failed to delete configuration")
        })
    }
}
