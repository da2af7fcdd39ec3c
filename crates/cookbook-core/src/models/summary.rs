// ABOUTME: Flattened recipe summary: total cook time and aggregated base ingredient quantities
// ABOUTME: Provides checked merge operations used by the recipe resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::entry::Ingredient;
use crate::errors::QuantityOverflow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Total units of one base ingredient needed by a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientSummary {
    /// Ingredient name
    pub name: String,
    /// Units needed, scaled through every level of nesting
    pub quantity: u64,
}

/// Fully flattened view of one recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    /// Recipe name
    pub name: String,
    /// Total cook time
    pub cook_time: u64,
    /// Base ingredients keyed by name
    pub ingredients: BTreeMap<String, IngredientSummary>,
}

impl RecipeSummary {
    /// Start an empty accumulator for `name`
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cook_time: 0,
            ingredients: BTreeMap::new(),
        }
    }

    /// Add `quantity` units of a base ingredient
    ///
    /// # Errors
    ///
    /// Returns [`QuantityOverflow`] if the running totals exceed `u64`.
    pub fn add_ingredient(
        &mut self,
        ingredient: &Ingredient,
        quantity: u64,
    ) -> Result<(), QuantityOverflow> {
        let cook_time = ingredient
            .cook_time
            .checked_mul(quantity)
            .ok_or(QuantityOverflow)?;
        self.add_cook_time(cook_time)?;
        self.add_quantity(&ingredient.name, quantity)
    }

    /// Add `quantity` copies of an already flattened sub-recipe
    ///
    /// # Errors
    ///
    /// Returns [`QuantityOverflow`] if the running totals exceed `u64`.
    pub fn absorb(&mut self, sub: &Self, quantity: u64) -> Result<(), QuantityOverflow> {
        let cook_time = sub
            .cook_time
            .checked_mul(quantity)
            .ok_or(QuantityOverflow)?;
        self.add_cook_time(cook_time)?;

        for ingredient in sub.ingredients.values() {
            let scaled = ingredient
                .quantity
                .checked_mul(quantity)
                .ok_or(QuantityOverflow)?;
            self.add_quantity(&ingredient.name, scaled)?;
        }
        Ok(())
    }

    /// Units of `ingredient` needed, if it appears at all
    #[must_use]
    pub fn quantity_of(&self, ingredient: &str) -> Option<u64> {
        self.ingredients.get(ingredient).map(|i| i.quantity)
    }

    fn add_cook_time(&mut self, cook_time: u64) -> Result<(), QuantityOverflow> {
        self.cook_time = self
            .cook_time
            .checked_add(cook_time)
            .ok_or(QuantityOverflow)?;
        Ok(())
    }

    fn add_quantity(&mut self, name: &str, quantity: u64) -> Result<(), QuantityOverflow> {
        if let Some(existing) = self.ingredients.get_mut(name) {
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(QuantityOverflow)?;
        } else {
            self.ingredients.insert(
                name.to_owned(),
                IngredientSummary {
                    name: name.to_owned(),
                    quantity,
                },
            );
        }
        Ok(())
    }
}
