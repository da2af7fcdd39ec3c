// ABOUTME: JSON payloads for entry registration as received on the wire
// ABOUTME: Numeric fields stay raw so non-integers are rejected by validation, not by serde
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /entry` body
///
/// Every field is optional here; the registration service decides which
/// absences are errors and in what order they are reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    /// Entry name
    #[serde(default)]
    pub name: Option<String>,
    /// `ingredient` or `recipe`
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Ingredient cook time, expected to be a non-negative integer
    #[serde(default)]
    pub cook_time: Option<Value>,
    /// Recipe items
    #[serde(default)]
    pub required_items: Option<Vec<RequiredItemRequest>>,
}

/// One element of `requiredItems`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredItemRequest {
    /// Referenced entry name
    #[serde(default)]
    pub name: Option<String>,
    /// Units required, expected to be a positive integer
    #[serde(default)]
    pub quantity: Option<Value>,
}

impl EntryRequest {
    /// Ingredient payload
    #[must_use]
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some("ingredient".to_owned()),
            cook_time: Some(Value::from(cook_time)),
            required_items: None,
        }
    }

    /// Recipe payload from `(name, quantity)` pairs
    #[must_use]
    pub fn recipe(name: impl Into<String>, items: &[(&str, i64)]) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some("recipe".to_owned()),
            cook_time: None,
            required_items: Some(
                items
                    .iter()
                    .map(|(item, quantity)| RequiredItemRequest {
                        name: Some((*item).to_owned()),
                        quantity: Some(Value::from(*quantity)),
                    })
                    .collect(),
            ),
        }
    }
}
