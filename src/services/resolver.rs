// ABOUTME: Flattens a recipe graph into total cook time and aggregated base ingredient quantities
// ABOUTME: Iterative depth-first expansion with per-call memo and in-progress cycle detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Resolver
//!
//! Expansion walks the recipe graph depth-first with an explicit frame stack
//! instead of native recursion, so chain length is limited by memory rather
//! than thread stack size.
//!
//! Per-call state:
//! - `memo`: finished sub-recipe summaries, keyed by name. Only recipes are
//!   memoized; ingredients are read straight from the cookbook.
//! - `in_progress`: names of the recipes on the current stack. A name is
//!   removed when its frame finishes, so a sub-recipe reached twice through
//!   different parents is a memo hit, not a cycle.
//!
//! Any missing reference, empty recipe, cycle, or arithmetic overflow fails
//! the whole resolution. The cause is logged but the caller only sees
//! [`ResolutionError::ResolutionFailure`].

use crate::errors::{QuantityOverflow, ResolutionError};
use crate::logging::AppLogger;
use crate::models::{Entry, Ingredient, Recipe, RecipeSummary, RequiredItem};
use crate::store::Cookbook;
use std::collections::{HashMap, HashSet};
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

/// Why an expansion stopped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    /// A required item names nothing in the cookbook
    #[error("'{0}' is not registered")]
    MissingReference(String),
    /// A recipe on the path has no required items
    #[error("recipe '{0}' has no required items")]
    EmptyRecipe(String),
    /// A recipe transitively requires itself
    #[error("recipe '{0}' is part of a cycle")]
    Cycle(String),
    /// Totals no longer fit in `u64`
    #[error("totals overflowed while expanding '{0}'")]
    Overflow(String),
}

/// Flatten the recipe called `name`
///
/// # Errors
///
/// Returns [`ResolutionError::NotFound`] if `name` is absent or names an
/// ingredient, and [`ResolutionError::ResolutionFailure`] for every failure
/// below the root.
pub fn resolve(cookbook: &Cookbook, name: &str) -> Result<RecipeSummary, ResolutionError> {
    let Some(root) = cookbook.recipe(name) else {
        return Err(ResolutionError::NotFound {
            name: name.to_owned(),
        });
    };

    let started = Instant::now();
    let result = Expansion::new(cookbook).run(root);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(summary) => {
            AppLogger::log_recipe_resolved(&summary, elapsed_ms);
            Ok(summary)
        }
        Err(cause) => {
            AppLogger::log_resolution_failed(name, &cause, elapsed_ms);
            Err(ResolutionError::ResolutionFailure {
                name: name.to_owned(),
            })
        }
    }
}

/// Like [`resolve`], but reports the underlying cause of a failure
///
/// # Errors
///
/// Returns `Ok(Err(cause))` when the root is a recipe that cannot be
/// expanded, and `Err(NotFound)` when the root itself is not a recipe.
pub fn diagnose(
    cookbook: &Cookbook,
    name: &str,
) -> Result<Result<RecipeSummary, FailureCause>, ResolutionError> {
    let root = cookbook
        .recipe(name)
        .ok_or_else(|| ResolutionError::NotFound {
            name: name.to_owned(),
        })?;
    Ok(Expansion::new(cookbook).run(root))
}

/// One recipe being accumulated
struct Frame<'a> {
    recipe: &'a Recipe,
    next: usize,
    summary: RecipeSummary,
}

impl<'a> Frame<'a> {
    fn new(recipe: &'a Recipe) -> Self {
        Self {
            recipe,
            next: 0,
            summary: RecipeSummary::empty(recipe.name()),
        }
    }

    fn pending(&self) -> Option<&'a RequiredItem> {
        self.recipe.required_items().get(self.next)
    }

    fn add_pending_ingredient(
        &mut self,
        ingredient: &Ingredient,
        quantity: u64,
    ) -> Result<(), FailureCause> {
        self.summary
            .add_ingredient(ingredient, quantity)
            .map_err(|QuantityOverflow| self.overflow())?;
        self.next += 1;
        Ok(())
    }

    fn absorb_pending(&mut self, sub: &RecipeSummary) -> Result<(), FailureCause> {
        let quantity = self.pending().map_or(0, |item| item.quantity);
        self.summary
            .absorb(sub, quantity)
            .map_err(|QuantityOverflow| self.overflow())?;
        self.next += 1;
        Ok(())
    }

    fn overflow(&self) -> FailureCause {
        FailureCause::Overflow(self.recipe.name().to_owned())
    }
}

/// State for a single top-level resolution
struct Expansion<'a> {
    cookbook: &'a Cookbook,
    memo: HashMap<&'a str, RecipeSummary>,
    in_progress: HashSet<&'a str>,
    stack: Vec<Frame<'a>>,
    memo_hits: usize,
}

impl<'a> Expansion<'a> {
    fn new(cookbook: &'a Cookbook) -> Self {
        Self {
            cookbook,
            memo: HashMap::new(),
            in_progress: HashSet::new(),
            stack: Vec::new(),
            memo_hits: 0,
        }
    }

    fn run(mut self, root: &'a Recipe) -> Result<RecipeSummary, FailureCause> {
        let cookbook = self.cookbook;
        // The root frame lives outside `stack`; `stack` only holds nested recipes.
        let mut root_frame = self.enter(root)?;

        loop {
            let frame = self.stack.last_mut().unwrap_or(&mut root_frame);

            let Some(item) = frame.pending() else {
                let Some(done) = self.stack.pop() else {
                    debug!(
                        recipe = %root.name(),
                        memo.entries = self.memo.len(),
                        memo.hits = self.memo_hits,
                        "Recipe expansion finished"
                    );
                    return Ok(self.leave(root_frame));
                };

                let recipe = done.recipe;
                let summary = self.leave(done);
                let summary = self.memo.entry(recipe.name()).or_insert(summary);
                let parent = self.stack.last_mut().unwrap_or(&mut root_frame);
                parent.absorb_pending(summary)?;
                continue;
            };

            match cookbook.get(&item.name) {
                None => return Err(FailureCause::MissingReference(item.name.clone())),
                Some(Entry::Ingredient(ingredient)) => {
                    frame.add_pending_ingredient(ingredient, item.quantity)?;
                }
                Some(Entry::Recipe(recipe)) => match self.memo.get(recipe.name()) {
                    Some(summary) => {
                        self.memo_hits += 1;
                        debug!(recipe = %recipe.name(), "Memoized sub-recipe reused");
                        frame.absorb_pending(summary)?;
                    }
                    None => {
                        let child = self.enter(recipe)?;
                        self.stack.push(child);
                    }
                },
            }
        }
    }

    /// Open a frame for `recipe`, failing on cycles and empty recipes
    fn enter(&mut self, recipe: &'a Recipe) -> Result<Frame<'a>, FailureCause> {
        if self.in_progress.contains(recipe.name()) {
            return Err(FailureCause::Cycle(recipe.name().to_owned()));
        }
        if recipe.required_items().is_empty() {
            return Err(FailureCause::EmptyRecipe(recipe.name().to_owned()));
        }
        self.in_progress.insert(recipe.name());
        Ok(Frame::new(recipe))
    }

    /// Close a finished frame and hand back its summary
    fn leave(&mut self, frame: Frame<'a>) -> RecipeSummary {
        self.in_progress.remove(frame.recipe.name());
        frame.summary
    }
}
