// ABOUTME: Unified error handling for CoachBot with standard error codes
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias used across crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! # Unified Error Handling System
//!
//! Every fallible operation in CoachBot returns [`AppResult`]. Errors carry a
//! stable [`ErrorCode`] so callers (the generation client in particular) can
//! categorize failures without parsing messages.

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    InvalidInput = 3000,
    /// A numeric value fell outside its accepted range
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// A feature name did not match the catalog
    UnknownFeature = 4000,

    // External Services (5000-5999)
    /// The generation service answered with an error
    ExternalServiceError = 5000,
    /// The generation service could not be reached
    ExternalServiceUnavailable = 5001,
    /// The generation service rejected the API key
    ExternalAuthFailed = 5002,
    /// The generation service quota or rate limit was hit
    ExternalRateLimited = 5003,
    /// The generation service did not answer in time
    ExternalServiceTimeout = 5004,

    // Configuration (6000-6999)
    /// Generic configuration error
    ConfigError = 6000,
    /// Configuration value could not be parsed
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Writing an export to disk failed
    StorageError = 9002,
    /// A payload could not be (de)serialized
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::UnknownFeature => "The requested coaching feature does not exist",
            Self::ExternalServiceError => "The AI service encountered an error",
            Self::ExternalServiceUnavailable => "The AI service is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with the AI service failed",
            Self::ExternalRateLimited => "AI service rate limit exceeded",
            Self::ExternalServiceTimeout => "The AI service did not respond in time",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value outside its accepted range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Feature name not present in the catalog
    #[must_use]
    pub fn unknown_feature(name: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnknownFeature,
            format!("Unknown coaching feature '{}'", name.into()),
        )
    }

    /// External service error
    #[must_use]
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }

    /// External service unreachable
    #[must_use]
    pub fn external_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceUnavailable, message)
    }

    /// External service rejected the credential
    #[must_use]
    pub fn auth_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalAuthFailed, message)
    }

    /// External service quota or rate limit exceeded
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalRateLimited, message)
    }

    /// External service timed out
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceTimeout, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Configuration value could not be parsed
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Storage error
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }
}
