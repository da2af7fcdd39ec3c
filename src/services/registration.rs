// ABOUTME: Validates entry registration payloads and inserts ingredients or recipes into the cookbook
// ABOUTME: First failure wins; the cookbook is only touched once the whole payload is valid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::RegistrationError;
use crate::logging::AppLogger;
use crate::models::{
    Entry, EntryId, EntryKind, EntryRequest, Ingredient, Recipe, RequiredItem,
    RequiredItemRequest,
};
use crate::store::Cookbook;
use serde_json::Value;
use std::collections::HashSet;

/// Validate `request` and insert the resulting entry
///
/// Validation order: name present, name unused, kind known, then the
/// kind-specific payload. Recipe items are checked one at a time in order,
/// quantity before duplicate name.
///
/// # Errors
///
/// Returns the first [`RegistrationError`] encountered; `cookbook` is left
/// unchanged in that case.
pub fn register(
    cookbook: &mut Cookbook,
    request: EntryRequest,
) -> Result<EntryId, RegistrationError> {
    let entry = validate(cookbook, request)?;
    let id = cookbook.insert(entry)?;
    AppLogger::log_entry_registered(&id);
    Ok(id)
}

/// Build the entry `request` describes without inserting it
///
/// # Errors
///
/// Same as [`register`].
pub fn validate(cookbook: &Cookbook, request: EntryRequest) -> Result<Entry, RegistrationError> {
    let name = match request.name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(RegistrationError::MissingName),
    };

    if cookbook.contains(&name) {
        return Err(RegistrationError::DuplicateName { name });
    }

    let kind = request.kind.as_deref().and_then(EntryKind::parse);
    match kind {
        Some(EntryKind::Ingredient) => {
            let cook_time = request
                .cook_time
                .as_ref()
                .and_then(Value::as_u64)
                .ok_or(RegistrationError::InvalidCookTime)?;
            Ok(Ingredient::new(name, cook_time).into())
        }
        Some(EntryKind::Recipe) => {
            let items = validate_required_items(request.required_items)?;
            Ok(Recipe::new(name, items)?.into())
        }
        None => Err(RegistrationError::InvalidKind { kind: request.kind }),
    }
}

fn validate_required_items(
    items: Option<Vec<RequiredItemRequest>>,
) -> Result<Vec<RequiredItem>, RegistrationError> {
    let items = match items {
        Some(items) if !items.is_empty() => items,
        _ => return Err(RegistrationError::InvalidRequiredItems),
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut required = Vec::with_capacity(items.len());
    for item in items {
        let name = match item.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(RegistrationError::InvalidRequiredItems),
        };

        // JSON integers only; floats, strings and zero are all rejected
        let quantity = match item.quantity.as_ref().and_then(Value::as_u64) {
            Some(quantity) if quantity > 0 => quantity,
            _ => return Err(RegistrationError::InvalidQuantity { item: name }),
        };

        if !seen.insert(name.clone()) {
            return Err(RegistrationError::DuplicateRequiredItem { item: name });
        }
        required.push(RequiredItem::new(name, quantity));
    }
    Ok(required)
}
