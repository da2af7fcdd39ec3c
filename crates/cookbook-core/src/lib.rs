// ABOUTME: Core types and constants for the cookbook recipe service
// ABOUTME: Foundation crate with error handling, entry models, summaries, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Cookbook Core
//!
//! Foundation crate providing shared types and constants for the cookbook
//! service. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the
//!   normalization, registration and resolution error taxonomies
//! - **models**: Ingredient and recipe entries, required items, summaries and wire requests
//! - **constants**: Service-wide constants organized by domain

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Cookbook entries, summaries and request payloads
pub mod models;
