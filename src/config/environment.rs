// ABOUTME: Environment-driven configuration for the coaching client
// ABOUTME: Parses API key, model, endpoint, timeout, sampling and export settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::generation;
use crate::errors::{AppError, AppResult};
use crate::generation::GenerationSettings;
use crate::llm::{API_BASE_URL, GEMINI_API_KEY_ENV};

/// Model identifier override
pub const MODEL_ENV: &str = "COACHBOT_MODEL";
/// Gemini REST base URL override
pub const API_BASE_URL_ENV: &str = "COACHBOT_API_BASE_URL";
/// HTTP request timeout in seconds
pub const TIMEOUT_SECS_ENV: &str = "COACHBOT_TIMEOUT_SECS";
/// Default sampling temperature for plans
pub const TEMPERATURE_ENV: &str = "COACHBOT_TEMPERATURE";
/// Output token limit
pub const MAX_OUTPUT_TOKENS_ENV: &str = "COACHBOT_MAX_OUTPUT_TOKENS";
/// Directory for exported plans
pub const EXPORT_DIR_ENV: &str = "COACHBOT_EXPORT_DIR";

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Runtime configuration
#[derive(Clone)]
pub struct CoachConfig {
    api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Gemini REST base URL
    pub api_base_url: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Default plan temperature
    pub temperature: f32,
    /// Output token limit
    pub max_output_tokens: u32,
    /// Directory for exported plans
    pub export_dir: PathBuf,
}

impl fmt::Debug for CoachConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoachConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("api_base_url", &self.api_base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("export_dir", &self.export_dir)
            .finish()
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: generation::DEFAULT_MODEL.to_owned(),
            api_base_url: API_BASE_URL.to_owned(),
            timeout: Duration::from_secs(generation::DEFAULT_TIMEOUT_SECS),
            temperature: generation::DEFAULT_TEMPERATURE,
            max_output_tokens: generation::DEFAULT_MAX_OUTPUT_TOKENS,
            export_dir: PathBuf::from("."),
        }
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(key: &str, default: T) -> AppResult<T> {
    match blank_to_none(env::var(key).ok()) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::config_invalid(format!("Invalid {key} value '{raw}'"))),
    }
}

impl CoachConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when a numeric variable does not parse or a
    /// value is out of range.
    pub fn from_env() -> AppResult<Self> {
        debug!("Loading configuration from environment variables");
        let defaults = Self::default();

        let config = Self {
            api_key: blank_to_none(env::var(GEMINI_API_KEY_ENV).ok()),
            model: blank_to_none(env::var(MODEL_ENV).ok()).unwrap_or(defaults.model),
            api_base_url: blank_to_none(env::var(API_BASE_URL_ENV).ok())
                .unwrap_or(defaults.api_base_url),
            timeout: Duration::from_secs(parse_var(
                TIMEOUT_SECS_ENV,
                generation::DEFAULT_TIMEOUT_SECS,
            )?),
            temperature: parse_var(TEMPERATURE_ENV, defaults.temperature)?,
            max_output_tokens: parse_var(MAX_OUTPUT_TOKENS_ENV, defaults.max_output_tokens)?,
            export_dir: blank_to_none(env::var(EXPORT_DIR_ENV).ok())
                .map_or(defaults.export_dir, PathBuf::from),
        };

        config.validate()?;
        info!(
            model = %config.model,
            key_configured = config.has_api_key(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` describing the first bad value.
    pub fn validate(&self) -> AppResult<()> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(AppError::config_invalid(format!(
                "{API_BASE_URL_ENV} must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(AppError::config_invalid(format!(
                "{TIMEOUT_SECS_ENV} must be greater than zero"
            )));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(AppError::config_invalid(format!(
                "{TEMPERATURE_ENV} must be between 0 and 1, got {}",
                self.temperature
            )));
        }
        if self.max_output_tokens == 0 {
            return Err(AppError::config_invalid(format!(
                "{MAX_OUTPUT_TOKENS_ENV} must be greater than zero"
            )));
        }
        Ok(())
    }

    /// Replace the API key; blank keys clear it
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = blank_to_none(Some(api_key.into()));
        self
    }

    /// Override the REST base URL
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether a non-blank API key is configured
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The API key, if configured
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Sampling settings for plan generation
    #[must_use]
    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::default()
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
            .with_max_output_tokens(self.max_output_tokens)
    }

    /// One-line summary without secrets
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "model={} endpoint={} timeout={}s key={}",
            self.model,
            self.api_base_url,
            self.timeout.as_secs(),
            if self.has_api_key() {
                "configured"
            } else {
                "missing"
            }
        )
    }
}
