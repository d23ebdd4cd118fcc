// ABOUTME: Tests for the configuration service layer
// ABOUTME: Verifies policy enforcement order and generic error wrapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use brewlog_server::database::configs::ConfigsManager;
use brewlog_server::errors::ErrorCode;
use brewlog_server::models::NewCoffeeConfig;
use brewlog_server::services::configs::ConfigService;
use common::create_test_database;

fn minimal_config(brand: &str, blend: &str) -> NewCoffeeConfig {
    NewCoffeeConfig {
        brand: brand.to_owned(),
        blend: blend.to_owned(),
        ..NewCoffeeConfig::default()
    }
}

async fn create_test_service() -> (ConfigService, ConfigsManager) {
    let database = create_test_database().await.unwrap();
    let manager = ConfigsManager::new(database.pool().clone());
    (ConfigService::new(manager.clone()), manager)
}

#[tokio::test]
async fn save_config_returns_id_and_persists() {
    let (service, _manager) = create_test_service().await;

    let id = service
        .save_config(&minimal_config("Lavazza", "Classico"))
        .await
        .unwrap();
    assert!(id >= 1);

    let configs = service.get_all_configs().await.unwrap();
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].brand, "Lavazza");
    assert_eq!(configs[0].blend, "Classico");
}

#[tokio::test]
async fn save_config_rejects_empty_brand_without_writing() {
    let (service, manager) = create_test_service().await;

    let error = service
        .save_config(&minimal_config("", "Classico"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.to_string(), "Brand and blend are required");

    // No storage write happened
    assert!(manager.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_config_rejects_empty_blend() {
    let (service, _manager) = create_test_service().await;

    let error = service
        .save_config(&minimal_config("Lavazza", ""))
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Brand and blend are required");
}

#[tokio::test]
async fn save_config_rejects_whitespace_only_required_fields() {
    let (service, manager) = create_test_service().await;

    let error = service
        .save_config(&minimal_config("   ", "Classico"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert!(manager.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_config_rejects_negative_numeric_field() {
    let (service, manager) = create_test_service().await;

    let mut config = minimal_config("Lavazza", "Classico");
    config.coffee_weight = Some(-1.0);

    let error = service.save_config(&config).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.to_string(), "Must be a non-negative number");
    assert!(manager.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn save_config_rejects_grind_size_above_max() {
    let (service, _manager) = create_test_service().await;

    let mut config = minimal_config("Lavazza", "Classico");
    config.grind_size = Some(15.0);

    let error = service.save_config(&config).await.unwrap_err();
    assert_eq!(error.to_string(), "Must be between 0 and 10");
}

#[tokio::test]
async fn save_config_accepts_boundary_values() {
    let (service, _manager) = create_test_service().await;

    let mut config = minimal_config("Lavazza", "Classico");
    config.coffee_weight = Some(0.0);
    config.grind_size = Some(10.0);

    service.save_config(&config).await.unwrap();
}

#[tokio::test]
async fn delete_config_of_missing_id_is_a_success() {
    let (service, _manager) = create_test_service().await;
    service.delete_config(4242).await.unwrap();
}

#[tokio::test]
async fn storage_failures_wrap_into_generic_messages() {
    let database = create_test_database().await.unwrap();
    let manager = ConfigsManager::new(database.pool().clone());
    let service = ConfigService::new(manager);

    // Closing the pool makes every statement fail
    database.pool().close().await;

    let error = service.get_all_configs().await.unwrap_err();
    assert_eq!(error.to_string(), "Failed to fetch configurations");

    let error = service
        .save_config(&minimal_config("Lavazza", "Classico"))
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Failed to save configuration");

    let error = service.delete_config(1).await.unwrap_err();
    assert_eq!(error.to_string(), "Failed to delete configuration");
}
