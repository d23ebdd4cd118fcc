// ABOUTME: Core data models for the Brewlog configuration service
// ABOUTME: Defines CoffeeConfig and the client-facing create request type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

//! # Data Models
//!
//! The single entity of the system is [`CoffeeConfig`], one saved coffee
//! brewing parameter set. Records are only ever created or deleted; no
//! update path exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One saved coffee brewing parameter set
///
/// `id` and `created_at` are assigned by storage at insertion and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeConfig {
    /// Unique identifier, assigned by storage on creation
    pub id: i64,
    /// Coffee brand (required)
    pub brand: String,
    /// Coffee blend (required)
    pub blend: String,
    /// Dose weight in grams
    pub coffee_weight: Option<f64>,
    /// Grinder setting
    pub grind_size: Option<f64>,
    /// Grind duration in seconds
    pub grind_time: Option<f64>,
    /// Water temperature in °C
    pub water_temp: Option<f64>,
    /// Brew duration in seconds
    pub brew_time: Option<f64>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Insertion timestamp, assigned by storage
    pub created_at: DateTime<Utc>,
}

/// Client-suppliable fields for creating a configuration
///
/// Deliberately excludes `id` and `created_at`: both are storage-owned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCoffeeConfig {
    /// Coffee brand (required)
    ///
    /// Defaults to empty when the key is absent so policy checks, not
    /// deserialization, decide the response.
    #[serde(default)]
    pub brand: String,
    /// Coffee blend (required)
    #[serde(default)]
    pub blend: String,
    /// Dose weight in grams
    #[serde(default)]
    pub coffee_weight: Option<f64>,
    /// Grinder setting
    #[serde(default)]
    pub grind_size: Option<f64>,
    /// Grind duration in seconds
    #[serde(default)]
    pub grind_time: Option<f64>,
    /// Water temperature in °C
    #[serde(default)]
    pub water_temp: Option<f64>,
    /// Brew duration in seconds
    #[serde(default)]
    pub brew_time: Option<f64>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}
