// ABOUTME: Unified error handling with error codes, AppError, and HTTP response mapping
// ABOUTME: Re-exports the cookbook domain errors and converts them into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Domain code returns the precise error enums from [`cookbook`]; request
//! handlers return [`AppError`], which carries an [`ErrorCode`] that decides
//! the HTTP status. Every client-caused failure on this service is a 400.

/// Name normalization, registration, and resolution errors
pub mod cookbook;

pub use cookbook::{NormalizationError, QuantityOverflow, RegistrationError, ResolutionError};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request payload was syntactically valid but semantically wrong
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A value could not be parsed into the expected shape
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A numeric value was outside its allowed range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Named entry does not exist or has the wrong kind
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Named entry already exists
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,
    /// Recipe graph could not be flattened
    #[serde(rename = "RESOLUTION_FAILED")]
    ResolutionFailed = 4002,

    // Configuration (6000-6999)
    /// Server configuration is invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected server-side failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange
            | Self::ResourceNotFound
            | Self::ResourceAlreadyExists
            | Self::ResolutionFailed => 400,

            Self::ConfigError | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The input format is invalid",
            Self::ValueOutOfRange => "A value is outside the allowed range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "The resource already exists",
            Self::ResolutionFailed => "The recipe could not be resolved",
            Self::ConfigError => "Server configuration error",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Request-boundary error carrying a code and a client-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Error classification
    pub code: ErrorCode,
    /// Human-readable message returned to the client
    pub message: String,
}

impl AppError {
    /// Create a new error
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl std::error::Error for AppError {}

impl From<NormalizationError> for AppError {
    fn from(error: NormalizationError) -> Self {
        Self::new(ErrorCode::InvalidFormat, error.to_string())
    }
}

impl From<RegistrationError> for AppError {
    fn from(error: RegistrationError) -> Self {
        let code = match &error {
            RegistrationError::MissingName => ErrorCode::MissingRequiredField,
            RegistrationError::DuplicateName { .. } => ErrorCode::ResourceAlreadyExists,
            RegistrationError::InvalidCookTime | RegistrationError::InvalidQuantity { .. } => {
                ErrorCode::ValueOutOfRange
            }
            RegistrationError::InvalidKind { .. }
            | RegistrationError::InvalidRequiredItems
            | RegistrationError::DuplicateRequiredItem { .. } => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string())
    }
}

impl From<ResolutionError> for AppError {
    fn from(error: ResolutionError) -> Self {
        let code = match &error {
            ResolutionError::NotFound { .. } => ErrorCode::ResourceNotFound,
            ResolutionError::ResolutionFailure { .. } => ErrorCode::ResolutionFailed,
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(error.code = ?self.code, error.message = %self.message, "Request failed");
        } else {
            tracing::debug!(error.code = ?self.code, error.message = %self.message, "Request rejected");
        }

        (status, self.message).into_response()
    }
}
