// ABOUTME: Domain error taxonomies for name parsing, entry registration, and recipe resolution
// ABOUTME: Each enum is converted into AppError at the request boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Failure to derive a display name from handwritten input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// Input was the empty string
    #[error("Invalid recipe name: input is empty")]
    EmptyInput,
    /// Nothing was left after stripping disallowed characters
    #[error("Invalid recipe name: no letters remain after parsing")]
    NothingLeft,
}

/// Rejection of a new cookbook entry. Variants are listed in validation order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// `name` absent or empty
    #[error("Invalid name")]
    MissingName,
    /// An entry with this name is already registered
    #[error("Entry '{name}' already exists")]
    DuplicateName {
        /// The conflicting name
        name: String,
    },
    /// `type` was not `ingredient` or `recipe`
    #[error("Invalid type: {}", .kind.as_deref().unwrap_or("<missing>"))]
    InvalidKind {
        /// The type as received, if any
        kind: Option<String>,
    },
    /// `cookTime` absent, negative, or not an integer
    #[error("Invalid cook time")]
    InvalidCookTime,
    /// `requiredItems` absent, empty, or containing an unnamed item
    #[error("Invalid required items")]
    InvalidRequiredItems,
    /// A required item quantity was not a positive integer
    #[error("Invalid quantity for required item '{item}'")]
    InvalidQuantity {
        /// Name of the offending item
        item: String,
    },
    /// The same item name appeared twice in one recipe
    #[error("Duplicate required item '{item}'")]
    DuplicateRequiredItem {
        /// The repeated item name
        item: String,
    },
}

/// Failure to summarize a recipe
///
/// Missing references, empty recipes, cycles and arithmetic overflow all
/// collapse into [`ResolutionError::ResolutionFailure`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The requested name is not a registered recipe
    #[error("Recipe '{name}' not found")]
    NotFound {
        /// The requested name
        name: String,
    },
    /// The recipe graph below the requested recipe cannot be flattened
    #[error("Recipe '{name}' references missing entries, an empty recipe, or contains a cycle")]
    ResolutionFailure {
        /// The requested recipe
        name: String,
    },
}

/// Aggregated quantity or cook time exceeded `u64`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("quantity overflow while aggregating summary")]
pub struct QuantityOverflow;
