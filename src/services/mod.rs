// ABOUTME: Domain service layer for cookbook business logic
// ABOUTME: Protocol-agnostic name parsing, entry registration, and recipe resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! This module contains the business rules extracted from route handlers.
//! Services operate on plain values and a borrowed [`Cookbook`](crate::store::Cookbook);
//! locking is the store's concern.

/// Handwritten recipe name normalization
pub mod normalizer;

/// Entry validation and insertion
pub mod registration;

/// Recipe graph flattening
pub mod resolver;
