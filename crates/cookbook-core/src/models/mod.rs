// ABOUTME: Cookbook data models shared by the store, services, and HTTP layer
// ABOUTME: Entries (ingredient or recipe), flattened summaries, and request payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ingredient and recipe entries
pub mod entry;
/// Wire payloads accepted by the registration endpoint
pub mod requests;
/// Flattened recipe summaries
pub mod summary;

pub use entry::{Entry, EntryId, EntryKind, Ingredient, Recipe, RequiredItem};
pub use requests::{EntryRequest, RequiredItemRequest};
pub use summary::{IngredientSummary, RecipeSummary};
