// ABOUTME: Unit tests for the configuration repository
// ABOUTME: Tests find-all ordering, save round-trips, and silent delete semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

#![allow(missing_docs, clippy::unwrap_used)]

mod common;

use brewlog_server::database::configs::ConfigsManager;
use brewlog_server::models::NewCoffeeConfig;
use common::create_test_database;

fn minimal_config(brand: &str, blend: &str) -> NewCoffeeConfig {
    NewCoffeeConfig {
        brand: brand.to_owned(),
        blend: blend.to_owned(),
        ..NewCoffeeConfig::default()
    }
}

async fn create_test_manager() -> ConfigsManager {
    let database = create_test_database().await.unwrap();
    ConfigsManager::new(database.pool().clone())
}

#[tokio::test]
async fn save_minimal_config_and_find_it() {
    let manager = create_test_manager().await;

    let id = manager
        .save(&minimal_config("Lavazza", "Classico"))
        .await
        .unwrap();
    assert!(id >= 1);

    let configs = manager.find_all().await.unwrap();
    assert_eq!(configs.len(), 1);

    let stored = &configs[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.brand, "Lavazza");
    assert_eq!(stored.blend, "Classico");
    assert!(stored.coffee_weight.is_none());
    assert!(stored.grind_size.is_none());
    assert!(stored.grind_time.is_none());
    assert!(stored.water_temp.is_none());
    assert!(stored.brew_time.is_none());
    assert!(stored.notes.is_none());
}

#[tokio::test]
async fn save_round_trips_every_field() {
    let manager = create_test_manager().await;

    let config = NewCoffeeConfig {
        brand: "Illy".to_owned(),
        blend: "Intenso".to_owned(),
        coffee_weight: Some(18.5),
        grind_size: Some(6.5),
        grind_time: Some(12.0),
        water_temp: Some(93.0),
        brew_time: Some(25.0),
        notes: Some("slightly finer than last time".to_owned()),
    };
    let id = manager.save(&config).await.unwrap();

    let configs = manager.find_all().await.unwrap();
    let stored = configs.iter().find(|c| c.id == id).unwrap();

    assert_eq!(stored.brand, config.brand);
    assert_eq!(stored.blend, config.blend);
    assert_eq!(stored.coffee_weight, config.coffee_weight);
    assert_eq!(stored.grind_size, config.grind_size);
    assert_eq!(stored.grind_time, config.grind_time);
    assert_eq!(stored.water_temp, config.water_temp);
    assert_eq!(stored.brew_time, config.brew_time);
    assert_eq!(stored.notes, config.notes);
}

#[tokio::test]
async fn find_all_orders_by_creation_time() {
    let manager = create_test_manager().await;

    let first = manager.save(&minimal_config("A", "one")).await.unwrap();
    let second = manager.save(&minimal_config("B", "two")).await.unwrap();
    let third = manager.save(&minimal_config("C", "three")).await.unwrap();

    let ids: Vec<i64> = manager
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, [first, second, third]);
}

#[tokio::test]
async fn storage_assigns_distinct_increasing_ids() {
    let manager = create_test_manager().await;

    let first = manager.save(&minimal_config("A", "one")).await.unwrap();
    let second = manager.save(&minimal_config("B", "two")).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn delete_of_missing_id_succeeds_without_changes() {
    let manager = create_test_manager().await;
    manager.save(&minimal_config("Lavazza", "Classico")).await.unwrap();

    manager.delete(9999).await.unwrap();

    let configs = manager.find_all().await.unwrap();
    assert_eq!(configs.len(), 1);
}

#[tokio::test]
async fn create_then_delete_removes_the_record() {
    let manager = create_test_manager().await;

    let keep = manager.save(&minimal_config("Keep", "me")).await.unwrap();
    let gone = manager.save(&minimal_config("Drop", "me")).await.unwrap();

    manager.delete(gone).await.unwrap();

    let ids: Vec<i64> = manager
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|c| c.id)
        .collect();
    assert!(ids.contains(&keep));
    assert!(!ids.contains(&gone));
}

#[tokio::test]
async fn save_does_not_revalidate_required_fields() {
    // The repository trusts its caller; policy lives in the service layer
    let manager = create_test_manager().await;

    let id = manager.save(&minimal_config("", "")).await.unwrap();
    let configs = manager.find_all().await.unwrap();
    assert!(configs.iter().any(|c| c.id == id));
}

#[tokio::test]
async fn created_at_is_assigned_by_storage() {
    let manager = create_test_manager().await;

    let before = chrono::Utc::now() - chrono::Duration::minutes(1);
    manager.save(&minimal_config("Lavazza", "Classico")).await.unwrap();
    let after = chrono::Utc::now() + chrono::Duration::minutes(1);

    let configs = manager.find_all().await.unwrap();
    let created_at = configs[0].created_at;
    assert!(created_at > before && created_at < after);
}
