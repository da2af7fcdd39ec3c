// ABOUTME: In-memory entry store mapping unique names to ingredient or recipe entries
// ABOUTME: Shared behind a tokio RwLock so registration is atomic with respect to resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Entry Store
//!
//! [`Cookbook`] is the plain name-to-entry map the services operate on.
//! [`EntryStore`] is the cloneable handle injected into request handlers:
//! registration takes the write lock for validation and insert together,
//! resolution takes the read lock for one whole expansion.

use crate::models::{Entry, EntryId, EntryRequest, Recipe, RecipeSummary};
use crate::errors::{RegistrationError, ResolutionError};
use crate::services::{registration, resolver};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Name-indexed cookbook entries. A name maps to exactly one entry.
#[derive(Debug, Clone, Default)]
pub struct Cookbook {
    entries: HashMap<String, Entry>,
}

impl Cookbook {
    /// Create an empty cookbook
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an entry by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Look up a recipe by name, ignoring ingredients
    #[must_use]
    pub fn recipe(&self, name: &str) -> Option<&Recipe> {
        match self.entries.get(name) {
            Some(Entry::Recipe(recipe)) => Some(recipe),
            Some(Entry::Ingredient(_)) | None => None,
        }
    }

    /// Whether `name` is registered as any kind
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert a new entry
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::DuplicateName`] if the name is taken,
    /// regardless of the existing entry's kind.
    pub fn insert(&mut self, entry: impl Into<Entry>) -> Result<EntryId, RegistrationError> {
        let entry = entry.into();
        if self.entries.contains_key(entry.name()) {
            return Err(RegistrationError::DuplicateName {
                name: entry.name().to_owned(),
            });
        }

        let id = EntryId::from(&entry);
        self.entries.insert(id.name.clone(), entry);
        Ok(id)
    }

    /// Number of registered entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }
}

/// Shared, lock-protected cookbook handle
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    cookbook: Arc<RwLock<Cookbook>>,
}

impl EntryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a new entry
    ///
    /// The write lock is held across validation and insert, so a concurrent
    /// registration of the same name cannot slip in between.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistrationError`] in validation order.
    #[instrument(skip_all, fields(entry.name = request.name.as_deref().unwrap_or_default()))]
    pub async fn register(&self, request: EntryRequest) -> Result<EntryId, RegistrationError> {
        let mut cookbook = self.cookbook.write().await;
        let id = registration::register(&mut cookbook, request)?;
        debug!(entries = cookbook.len(), "Cookbook updated");
        Ok(id)
    }

    /// Flatten the named recipe against a consistent snapshot
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::NotFound`] if `name` is not a recipe and
    /// [`ResolutionError::ResolutionFailure`] if it cannot be expanded.
    #[instrument(skip(self))]
    pub async fn summarize(&self, name: &str) -> Result<RecipeSummary, ResolutionError> {
        let cookbook = self.cookbook.read().await;
        resolver::resolve(&cookbook, name)
    }

    /// Clone out a single entry
    pub async fn get(&self, name: &str) -> Option<Entry> {
        self.cookbook.read().await.get(name).cloned()
    }

    /// Number of registered entries
    pub async fn len(&self) -> usize {
        self.cookbook.read().await.len()
    }

    /// Whether nothing has been registered
    pub async fn is_empty(&self) -> bool {
        self.cookbook.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryKind, Ingredient, RequiredItem};

    #[test]
    fn test_insert_rejects_name_of_either_kind() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(Ingredient::new("Beef", 10)).unwrap();

        let err = cookbook
            .insert(Recipe::new("Beef", vec![RequiredItem::new("Salt", 1)]).unwrap())
            .unwrap_err();

        assert_eq!(
            err,
            RegistrationError::DuplicateName {
                name: "Beef".into()
            }
        );
        assert_eq!(cookbook.len(), 1);
        assert!(cookbook.recipe("Beef").is_none());
        assert!(cookbook.iter().all(|entry| entry.kind() == EntryKind::Ingredient));
    }

    #[tokio::test]
    async fn test_store_register_then_summarize() {
        let store = EntryStore::new();
        store
            .register(EntryRequest::ingredient("Bun", 10))
            .await
            .unwrap();
        store
            .register(EntryRequest::recipe("Burger", &[("Bun", 2)]))
            .await
            .unwrap();

        let summary = store.summarize("Burger").await.unwrap();
        assert_eq!(summary.cook_time, 20);
        assert_eq!(summary.quantity_of("Bun"), Some(2));
        assert_eq!(store.len().await, 2);
    }
}
