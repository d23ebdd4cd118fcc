// ABOUTME: Field validation rules shared by the server and its clients
// ABOUTME: Pure functions plus a serializable rule catalog for the config form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brewlog Contributors

//! Field validation rules
//!
//! The single source of truth for field constraints. The service layer
//! applies [`check_config`] at the trust boundary before any storage write;
//! clients fetch the same catalog as JSON (`GET /api/configs/rules`) or, for
//! the in-crate CLI, call [`form_rules`] directly, so their copy is purely
//! advisory.
//!
//! All functions here are pure: no I/O, no side effects.

use crate::models::NewCoffeeConfig;
use serde::{Deserialize, Serialize};

/// Outcome of checking a single field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    /// Whether the value passed the check
    pub is_valid: bool,
    /// Failure message, empty when valid
    pub message: String,
}

impl FieldCheck {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Check that a value is a non-empty, non-whitespace string
#[must_use]
pub fn validate_required(value: &str, field_name: &str) -> FieldCheck {
    if value.trim().is_empty() {
        FieldCheck::invalid(format!("{field_name} is required"))
    } else {
        FieldCheck::valid()
    }
}

/// Check that a value parses as a number within `[min, max]`
///
/// An empty value is valid: numeric fields are optional. When `max` is
/// unset only the lower bound applies.
#[must_use]
pub fn validate_number(value: &str, _field_name: &str, min: f64, max: Option<f64>) -> FieldCheck {
    if value.is_empty() {
        return FieldCheck::valid();
    }
    match value.parse::<f64>() {
        Ok(num) => check_range(num, min, max),
        Err(_) => FieldCheck::invalid(range_message(min, max)),
    }
}

fn check_range(num: f64, min: f64, max: Option<f64>) -> FieldCheck {
    let out_of_range = num.is_nan() || num < min || max.is_some_and(|m| num > m);
    if out_of_range {
        FieldCheck::invalid(range_message(min, max))
    } else {
        FieldCheck::valid()
    }
}

fn range_message(min: f64, max: Option<f64>) -> String {
    match max {
        Some(max) => format!("Must be between {min} and {max}"),
        None => "Must be a non-negative number".to_owned(),
    }
}

/// Serializable description of one form field's constraints
///
/// Served to clients as JSON so the form can mirror server policy without
/// duplicating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    /// Field name as it appears in the create request
    pub name: String,
    /// Human-readable label for form rendering
    pub label: String,
    /// Whether an empty value blocks persistence
    pub required: bool,
    /// Whether the field holds a number
    pub numeric: bool,
    /// Lower bound for numeric fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound for numeric fields, unbounded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Display unit for form rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Input step for form rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl FieldRule {
    fn required(name: &str, label: &str) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
            required: true,
            numeric: false,
            min: None,
            max: None,
            unit: None,
            step: None,
        }
    }

    fn numeric(name: &str, label: &str, max: Option<f64>, unit: Option<&str>, step: f64) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
            required: false,
            numeric: true,
            min: Some(0.0),
            max,
            unit: unit.map(str::to_owned),
            step: Some(step),
        }
    }

    fn free_text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
            required: false,
            numeric: false,
            min: None,
            max: None,
            unit: None,
            step: None,
        }
    }

    /// Check a raw string value (form/CLI input) against this rule
    #[must_use]
    pub fn check_str(&self, value: &str) -> FieldCheck {
        if self.required {
            return validate_required(value, &self.label);
        }
        if self.numeric {
            return validate_number(value, &self.name, self.min.unwrap_or(0.0), self.max);
        }
        FieldCheck::valid()
    }

    /// Check an already-parsed numeric value against this rule
    ///
    /// Absent values are valid: numeric fields are optional.
    #[must_use]
    pub fn check_value(&self, value: Option<f64>) -> FieldCheck {
        match value {
            Some(num) if self.numeric => check_range(num, self.min.unwrap_or(0.0), self.max),
            _ => FieldCheck::valid(),
        }
    }
}

/// The canonical rule catalog for the configuration form
#[must_use]
pub fn form_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::required("brand", "Brand"),
        FieldRule::required("blend", "Blend"),
        FieldRule::numeric("coffee_weight", "Coffee Weight (g)", None, Some("g"), 0.1),
        FieldRule::numeric("grind_size", "Grind Size", Some(10.0), None, 0.1),
        FieldRule::numeric("grind_time", "Grind Time (seconds)", None, Some("s"), 1.0),
        FieldRule::numeric("water_temp", "Water Temperature (°C)", None, Some("°C"), 1.0),
        FieldRule::numeric("brew_time", "Brew Time (seconds)", None, Some("s"), 1.0),
        FieldRule::free_text("notes", "Notes"),
    ]
}

/// A failed field check, tagged with the field name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Field name as it appears in the create request
    pub field: String,
    /// Failure message
    pub message: String,
}

/// Apply the whole rule catalog to a create request
///
/// Returns every failed check in catalog order, empty when the request is
/// persistable.
#[must_use]
pub fn check_config(config: &NewCoffeeConfig) -> Vec<FieldError> {
    let mut failures = Vec::new();

    for rule in form_rules() {
        let check = match rule.name.as_str() {
            "brand" => rule.check_str(&config.brand),
            "blend" => rule.check_str(&config.blend),
            "coffee_weight" => rule.check_value(config.coffee_weight),
            "grind_size" => rule.check_value(config.grind_size),
            "grind_time" => rule.check_value(config.grind_time),
            "water_temp" => rule.check_value(config.water_temp),
            "brew_time" => rule.check_value(config.brew_time),
            // notes: free text, nothing to check
            _ => FieldCheck::valid(),
        };
        if !check.is_valid {
            failures.push(FieldError {
                field: rule.name,
                message: check.message,
            });
        }
    }

    failures
}
