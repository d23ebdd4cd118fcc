// ABOUTME: Database operations for coffee brewing configuration records
// ABOUTME: Handles find-all, save, and delete against the coffee_configs table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

use crate::errors::{AppError, AppResult};
use crate::models::{CoffeeConfig, NewCoffeeConfig};
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Repository for coffee configuration records
///
/// The only component touching storage. `save` assumes the caller already
/// enforced required-field rules; inserting with absent optional numeric
/// fields is permitted.
#[derive(Clone)]
pub struct ConfigsManager {
    pool: SqlitePool,
}

impl ConfigsManager {
    /// Create a new manager over an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch every stored configuration, ordered by creation time ascending
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find_all(&self) -> AppResult<Vec<CoffeeConfig>> {
        let rows = sqlx::query(
            r"
            SELECT id, brand, blend, coffee_weight, grind_size, grind_time,
                   water_temp, brew_time, notes, created_at
            FROM coffee_configs
            ORDER BY created_at ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list configurations: {e}")))?;

        rows.iter().map(row_to_config).collect()
    }

    /// Insert a new configuration, returning the storage-assigned id
    ///
    /// `id` and `created_at` are assigned by storage: the insert names
    /// neither column.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn save(&self, config: &NewCoffeeConfig) -> AppResult<i64> {
        let result = sqlx::query(
            r"
            INSERT INTO coffee_configs
                (brand, blend, coffee_weight, grind_size, grind_time, water_temp, brew_time, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(&config.brand)
        .bind(&config.blend)
        .bind(config.coffee_weight)
        .bind(config.grind_size)
        .bind(config.grind_time)
        .bind(config.water_temp)
        .bind(config.brew_time)
        .bind(&config.notes)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to save configuration: {e}")))?;

        Ok(result.last_insert_rowid())
    }

    /// Delete a configuration by id
    ///
    /// Deleting a non-existent id succeeds silently: no existence check.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM coffee_configs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete configuration: {e}")))?;

        Ok(())
    }
}

fn row_to_config(row: &SqliteRow) -> AppResult<CoffeeConfig> {
    let created_at_str: String = row.get("created_at");
    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| AppError::internal(format!("Invalid created_at timestamp: {e}")))?
        .with_timezone(&Utc);

    Ok(CoffeeConfig {
        id: row.get("id"),
        brand: row.get("brand"),
        blend: row.get("blend"),
        coffee_weight: row.get("coffee_weight"),
        grind_size: row.get("grind_size"),
        grind_time: row.get("grind_time"),
        water_temp: row.get("water_temp"),
        brew_time: row.get("brew_time"),
        notes: row.get("notes"),
        created_at,
    })
}
