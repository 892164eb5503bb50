// ABOUTME: Soft-fail generation client wrapping an LLM provider
// ABOUTME: Converts every provider failure into a typed outcome with a user-facing hint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! # Generation Client
//!
//! [`GenerationClient::generate`] performs exactly one provider call and always
//! returns a [`GenerationOutcome`]. Nothing in the generation path propagates
//! an error to the caller:
//!
//! - non-empty text becomes [`GenerationOutcome::Generated`]
//! - an empty or blocked answer becomes [`GenerationOutcome::Unavailable`],
//!   displayed as a fixed placeholder
//! - any provider error becomes [`GenerationOutcome::Failed`], displayed as
//!   `"Model Error: <message>"` together with a [`FailureKind`] hint

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{error, field, info, instrument, warn, Span};

use crate::constants::generation;
use crate::errors::{AppError, ErrorCode};
use crate::llm::{ChatRequest, LlmProvider};

/// Sampling parameters for one generation call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationSettings {
    /// Model identifier
    pub model: String,
    /// Sampling temperature, always within `[0, 1]`
    temperature: f32,
    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
    /// Nucleus sampling mass, omitted from the request when `None`
    pub top_p: Option<f32>,
    /// Top-k sampling, omitted from the request when `None`
    pub top_k: Option<u32>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: generation::DEFAULT_MODEL.to_owned(),
            temperature: generation::DEFAULT_TEMPERATURE,
            max_output_tokens: generation::DEFAULT_MAX_OUTPUT_TOKENS,
            top_p: Some(generation::DEFAULT_TOP_P),
            top_k: Some(generation::DEFAULT_TOP_K),
        }
    }
}

impl GenerationSettings {
    /// Settings for the custom question path: temperature is the 1-100
    /// advice intensity divided by 100, with no top-p/top-k.
    #[must_use]
    pub fn from_intensity(intensity: u8) -> Self {
        let intensity = intensity.clamp(1, generation::MAX_ADVICE_INTENSITY);
        Self {
            top_p: None,
            top_k: None,
            ..Self::default()
        }
        .with_temperature(f32::from(intensity) / 100.0)
    }

    /// Sampling temperature
    #[must_use]
    pub const fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Set the temperature, clamped into `[0, 1]`
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = if temperature.is_nan() {
            generation::DEFAULT_TEMPERATURE
        } else {
            temperature.clamp(0.0, 1.0)
        };
        self
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the output token limit
    #[must_use]
    pub const fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Build the provider request for `prompt`
    #[must_use]
    pub fn to_request(&self, prompt: &str) -> ChatRequest {
        let mut request = ChatRequest::from_prompt(prompt)
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_output_tokens);
        request.top_p = self.top_p;
        request.top_k = self.top_k;
        request
    }
}

/// Category of a failed generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Quota or rate limit exhausted
    Quota,
    /// API key rejected
    InvalidCredential,
    /// Request or answer blocked by safety filters
    Blocked,
    /// No answer within the request timeout
    Timeout,
    /// Anything else (network, server error, malformed payload)
    Transport,
}

impl FailureKind {
    /// Categorize a provider error.
    ///
    /// The message is checked for "quota", "api key" and "blocked" in that
    /// order; only then does the error code decide.
    #[must_use]
    pub fn categorize(code: ErrorCode, message: &str) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("quota") {
            return Self::Quota;
        }
        if lowered.contains("api key") {
            return Self::InvalidCredential;
        }
        if lowered.contains("blocked") {
            return Self::Blocked;
        }
        match code {
            ErrorCode::ExternalRateLimited => Self::Quota,
            ErrorCode::ExternalAuthFailed => Self::InvalidCredential,
            ErrorCode::ExternalServiceTimeout => Self::Timeout,
            _ => Self::Transport,
        }
    }

    /// Hint shown under the error message
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::Quota => "API quota exceeded. Please wait a moment and try again.",
            Self::InvalidCredential => {
                "API key issue. Please verify your API key is correct and active."
            }
            Self::Blocked => "Content blocked by safety filters. Try rephrasing your request.",
            Self::Timeout => "The AI Coach took too long to respond. Please try again.",
            Self::Transport => {
                "Try: checking your API key · simplifying your request · waiting a moment · checking your internet connection"
            }
        }
    }
}

/// A failed generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationError {
    /// Failure category
    pub kind: FailureKind,
    /// Error code reported by the provider
    pub code: ErrorCode,
    /// Provider message
    pub message: String,
}

impl GenerationError {
    /// Hint matching the failure category
    #[must_use]
    pub const fn hint(&self) -> &'static str {
        self.kind.hint()
    }
}

impl From<AppError> for GenerationError {
    fn from(err: AppError) -> Self {
        Self {
            kind: FailureKind::categorize(err.code, &err.message),
            code: err.code,
            message: err.message,
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", generation::MODEL_ERROR_PREFIX, self.message)
    }
}

/// Coarse status of an outcome, recorded in the session history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// The model produced text
    Generated,
    /// The model produced nothing usable
    Unavailable,
    /// The call failed
    Failed,
}

impl OutcomeStatus {
    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Unavailable => "unavailable",
            Self::Failed => "failed",
        }
    }
}

/// Result of one generation call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// Non-empty text from the first candidate
    Generated {
        /// Generated text
        text: String,
        /// Model that answered
        model: String,
        /// Finish reason reported by the model
        finish_reason: Option<String>,
    },
    /// Empty or blocked answer
    Unavailable {
        /// Finish or block reason reported by the model
        finish_reason: Option<String>,
    },
    /// The call failed
    Failed(GenerationError),
}

impl GenerationOutcome {
    /// Text shown to the athlete: the plan, the placeholder, or the model error
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Generated { text, .. } => text.clone(),
            Self::Unavailable { .. } => generation::UNAVAILABLE_MESSAGE.to_owned(),
            Self::Failed(err) => err.to_string(),
        }
    }

    /// Hint for failed calls
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Failed(err) => Some(err.hint()),
            Self::Generated { .. } | Self::Unavailable { .. } => None,
        }
    }

    /// Coarse status
    #[must_use]
    pub const fn status(&self) -> OutcomeStatus {
        match self {
            Self::Generated { .. } => OutcomeStatus::Generated,
            Self::Unavailable { .. } => OutcomeStatus::Unavailable,
            Self::Failed(_) => OutcomeStatus::Failed,
        }
    }

    /// Whether the model produced text
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }

    /// Apply `f` to generated text, leaving other outcomes untouched
    #[must_use]
    pub fn map_text(self, f: impl FnOnce(&str) -> String) -> Self {
        match self {
            Self::Generated {
                text,
                model,
                finish_reason,
            } => Self::Generated {
                text: f(&text),
                model,
                finish_reason,
            },
            other => other,
        }
    }
}

/// Generation client with a soft-fail policy
#[derive(Clone)]
pub struct GenerationClient {
    provider: Arc<dyn LlmProvider>,
}

impl fmt::Debug for GenerationClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationClient")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl GenerationClient {
    /// Wrap a provider
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Underlying provider
    #[must_use]
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Perform one generation call. Never fails.
    #[instrument(skip_all, fields(provider = field::Empty, model = field::Empty))]
    pub async fn generate(&self, prompt: &str, settings: &GenerationSettings) -> GenerationOutcome {
        let span = Span::current();
        span.record("provider", self.provider.name());
        span.record("model", settings.model.as_str());

        let request = settings.to_request(prompt);
        match self.provider.complete(&request).await {
            Ok(response) if response.has_content() => {
                info!(
                    chars = response.content.len(),
                    finish_reason = response.finish_reason.as_deref(),
                    "Generated coaching response"
                );
                GenerationOutcome::Generated {
                    text: response.content,
                    model: response.model,
                    finish_reason: response.finish_reason,
                }
            }
            Ok(response) => {
                warn!(
                    finish_reason = response.finish_reason.as_deref(),
                    block_reason = response.block_reason.as_deref(),
                    "Model returned no usable content"
                );
                GenerationOutcome::Unavailable {
                    finish_reason: response.block_reason.or(response.finish_reason),
                }
            }
            Err(err) => {
                let failure = GenerationError::from(err);
                error!(
                    kind = ?failure.kind,
                    code = ?failure.code,
                    "Generation call failed: {}",
                    failure.message
                );
                GenerationOutcome::Failed(failure)
            }
        }
    }
}
