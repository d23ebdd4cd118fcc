// ABOUTME: Configuration commands - add, list, delete, suggest, and rules
// ABOUTME: Validates locally with the shared rules, then drives the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

use brewlog_server::client::ApiClient;
use brewlog_server::errors::{AppError, AppResult};
use brewlog_server::models::{CoffeeConfig, NewCoffeeConfig};
use brewlog_server::validation;

/// Raw field values for an `add` invocation
///
/// Numeric fields arrive as strings so local validation mirrors form input
/// exactly: an absent flag is an empty field.
pub struct AddInput {
    pub brand: String,
    pub blend: String,
    pub coffee_weight: Option<String>,
    pub grind_size: Option<String>,
    pub grind_time: Option<String>,
    pub water_temp: Option<String>,
    pub brew_time: Option<String>,
    pub notes: Option<String>,
}

impl AddInput {
    /// Raw string value for a rule name, empty when the flag was not given
    fn value_for(&self, name: &str) -> &str {
        let value = match name {
            "brand" => Some(&self.brand),
            "blend" => Some(&self.blend),
            "coffee_weight" => self.coffee_weight.as_ref(),
            "grind_size" => self.grind_size.as_ref(),
            "grind_time" => self.grind_time.as_ref(),
            "water_temp" => self.water_temp.as_ref(),
            "brew_time" => self.brew_time.as_ref(),
            "notes" => self.notes.as_ref(),
            _ => None,
        };
        value.map_or("", String::as_str)
    }

    /// Convert validated input into a create request
    fn into_request(self) -> NewCoffeeConfig {
        NewCoffeeConfig {
            brand: self.brand,
            blend: self.blend,
            coffee_weight: parse_optional(self.coffee_weight),
            grind_size: parse_optional(self.grind_size),
            grind_time: parse_optional(self.grind_time),
            water_temp: parse_optional(self.water_temp),
            brew_time: parse_optional(self.brew_time),
            notes: self.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

fn parse_optional(value: Option<String>) -> Option<f64> {
    value.filter(|v| !v.is_empty()).and_then(|v| v.parse().ok())
}

/// Validate locally, then submit a create request
///
/// Invalid fields print inline and abort before any request is sent. On
/// success the new id prints along with refreshed suggestion sets.
pub async fn add(client: &ApiClient, input: AddInput) -> AppResult<()> {
    let mut failures = Vec::new();
    for rule in validation::form_rules() {
        let check = rule.check_str(input.value_for(&rule.name));
        if !check.is_valid {
            failures.push((rule.label, check.message));
        }
    }

    if !failures.is_empty() {
        eprintln!("Please fix the following fields:");
        for (label, message) in failures {
            eprintln!("  {label}: {message}");
        }
        return Err(AppError::invalid_input("Validation failed"));
    }

    let id = client.create_config(&input.into_request()).await?;
    println!("Saved configuration #{id}");

    let suggestions = client.fetch_suggestions().await?;
    println!(
        "Known brands: {}",
        format_suggestion_list(&suggestions.brands)
    );
    println!(
        "Known blends: {}",
        format_suggestion_list(&suggestions.blends)
    );
    Ok(())
}

/// Fetch and render all stored configurations
pub async fn list(client: &ApiClient) -> AppResult<()> {
    let configs = client.list_configs().await?;
    render_all(&configs);
    Ok(())
}

/// Delete a configuration, then re-fetch the list to reflect current state
pub async fn delete(client: &ApiClient, id: i64) -> AppResult<()> {
    let outcome = client.delete_config(id).await;
    if let Ok(message) = &outcome {
        println!("{message}");
    }

    // Re-fetch on success or failure so the rendered view matches storage
    if let Ok(configs) = client.list_configs().await {
        render_all(&configs);
    }

    outcome.map(|_| ())
}

/// Show brand/blend autocomplete suggestions derived from stored configs
pub async fn suggest(client: &ApiClient) -> AppResult<()> {
    let suggestions = client.fetch_suggestions().await?;
    println!("Brands: {}", format_suggestion_list(&suggestions.brands));
    println!("Blends: {}", format_suggestion_list(&suggestions.blends));
    Ok(())
}

/// Fetch and render the server's field-rule catalog
pub async fn rules(client: &ApiClient) -> AppResult<()> {
    let catalog = client.fetch_rules().await?;
    for rule in catalog {
        let mut constraints = Vec::new();
        if rule.required {
            constraints.push("required".to_owned());
        }
        if rule.numeric {
            let min = rule.min.unwrap_or(0.0);
            match rule.max {
                Some(max) => constraints.push(format!("range {min}..={max}")),
                None => constraints.push(format!("min {min}")),
            }
        }
        if let Some(unit) = &rule.unit {
            constraints.push(format!("unit {unit}"));
        }
        if constraints.is_empty() {
            constraints.push("free text".to_owned());
        }
        println!("{:<14} {:<24} {}", rule.name, rule.label, constraints.join(", "));
    }
    Ok(())
}

fn render_all(configs: &[CoffeeConfig]) {
    if configs.is_empty() {
        println!("No configurations saved yet");
        return;
    }
    for config in configs {
        println!("{}", render_config(config));
    }
}

fn render_config(config: &CoffeeConfig) -> String {
    let mut lines = vec![format!("#{} {} - {}", config.id, config.brand, config.blend)];

    let mut params = Vec::new();
    if let Some(weight) = config.coffee_weight {
        params.push(format!("weight {weight}g"));
    }
    if let Some(size) = config.grind_size {
        params.push(format!("grind size {size}"));
    }
    if let Some(time) = config.grind_time {
        params.push(format!("grind time {time}s"));
    }
    if let Some(temp) = config.water_temp {
        params.push(format!("water {temp}°C"));
    }
    if let Some(time) = config.brew_time {
        params.push(format!("brew {time}s"));
    }
    if !params.is_empty() {
        lines.push(format!("    {}", params.join(" | ")));
    }

    if let Some(notes) = &config.notes {
        lines.push(format!("    notes: {notes}"));
    }
    lines.push(format!("    created {}", config.created_at.to_rfc3339()));

    lines.join("\n")
}

fn format_suggestion_list(values: &[String]) -> String {
    if values.is_empty() {
        "(none yet)".to_owned()
    } else {
        values.join(", ")
    }
}
