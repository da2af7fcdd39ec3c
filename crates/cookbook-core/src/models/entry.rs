// ABOUTME: Cookbook entry model: a name bound to exactly one Ingredient or Recipe
// ABOUTME: Recipe construction enforces positive quantities and unique item names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::RegistrationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Kind of a cookbook entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Leaf entry with its own cook time
    Ingredient,
    /// Entry composed of other entries
    Recipe,
}

impl EntryKind {
    /// Parse the wire `type` field. Matching is exact and case-sensitive.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ingredient" => Some(Self::Ingredient),
            "recipe" => Some(Self::Recipe),
            _ => None,
        }
    }

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Recipe => "recipe",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base ingredient. Contributes its own cook time and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique entry name
    pub name: String,
    /// Cook time in minutes for one unit
    pub cook_time: u64,
}

impl Ingredient {
    /// Create an ingredient
    #[must_use]
    pub fn new(name: impl Into<String>, cook_time: u64) -> Self {
        Self {
            name: name.into(),
            cook_time,
        }
    }
}

/// One line of a recipe: `quantity` units of the entry called `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    /// Referenced entry name (may not be registered yet)
    pub name: String,
    /// Units consumed, always > 0
    pub quantity: u64,
}

impl RequiredItem {
    /// Create a required item
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Recipe composed of other entries
///
/// `item_names` mirrors `required_items`: every item name appears exactly
/// once in each. Fields are private so the mirror cannot drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    required_items: Vec<RequiredItem>,
    item_names: HashSet<String>,
}

impl Recipe {
    /// Build a recipe from its required items, in order
    ///
    /// An empty item list is accepted here; registration rejects it, and the
    /// resolver treats such a recipe as unresolvable.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidQuantity`] for a zero quantity and
    /// [`RegistrationError::DuplicateRequiredItem`] for a repeated item name,
    /// whichever comes first in item order.
    pub fn new(
        name: impl Into<String>,
        required_items: Vec<RequiredItem>,
    ) -> Result<Self, RegistrationError> {
        let mut item_names = HashSet::with_capacity(required_items.len());
        for item in &required_items {
            if item.quantity == 0 {
                return Err(RegistrationError::InvalidQuantity {
                    item: item.name.clone(),
                });
            }
            if !item_names.insert(item.name.clone()) {
                return Err(RegistrationError::DuplicateRequiredItem {
                    item: item.name.clone(),
                });
            }
        }

        Ok(Self {
            name: name.into(),
            required_items,
            item_names,
        })
    }

    /// Unique entry name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required items in registration order
    #[must_use]
    pub fn required_items(&self) -> &[RequiredItem] {
        &self.required_items
    }

    /// Whether this recipe directly requires `item`
    #[must_use]
    pub fn requires(&self, item: &str) -> bool {
        self.item_names.contains(item)
    }
}

/// A registered cookbook entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Leaf ingredient
    Ingredient(Ingredient),
    /// Composite recipe
    Recipe(Recipe),
}

impl Entry {
    /// Unique entry name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe(recipe) => recipe.name(),
        }
    }

    /// Kind of this entry
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Ingredient(_) => EntryKind::Ingredient,
            Self::Recipe(_) => EntryKind::Recipe,
        }
    }
}

impl From<Ingredient> for Entry {
    fn from(ingredient: Ingredient) -> Self {
        Self::Ingredient(ingredient)
    }
}

impl From<Recipe> for Entry {
    fn from(recipe: Recipe) -> Self {
        Self::Recipe(recipe)
    }
}

/// Identity of a successfully registered entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId {
    /// Registered name
    pub name: String,
    /// Registered kind
    pub kind: EntryKind,
}

impl From<&Entry> for EntryId {
    fn from(entry: &Entry) -> Self {
        Self {
            name: entry.name().to_owned(),
            kind: entry.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_parse_is_exact() {
        assert_eq!(EntryKind::parse("recipe"), Some(EntryKind::Recipe));
        assert_eq!(EntryKind::parse("ingredient"), Some(EntryKind::Ingredient));
        assert_eq!(EntryKind::parse("Recipe"), None);
        assert_eq!(EntryKind::parse("pan"), None);
    }

    #[test]
    fn test_recipe_mirrors_item_names() {
        let recipe = Recipe::new(
            "Burger",
            vec![RequiredItem::new("Bun", 2), RequiredItem::new("Patty", 1)],
        )
        .unwrap();

        assert!(recipe.requires("Bun"));
        assert!(recipe.requires("Patty"));
        assert!(!recipe.requires("Lettuce"));
        assert_eq!(recipe.required_items().len(), 2);
    }

    #[test]
    fn test_recipe_rejects_duplicate_items() {
        let err = Recipe::new(
            "Yakiniku",
            vec![RequiredItem::new("Beef", 1), RequiredItem::new("Beef", 1)],
        )
        .unwrap_err();

        assert_eq!(
            err,
            RegistrationError::DuplicateRequiredItem {
                item: "Beef".into()
            }
        );
    }

    #[test]
    fn test_recipe_rejects_zero_quantity() {
        let err = Recipe::new("Daifuku", vec![RequiredItem::new("Kinoko", 0)]).unwrap_err();
        assert!(matches!(err, RegistrationError::InvalidQuantity { .. }));
    }
}
