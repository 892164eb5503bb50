// ABOUTME: Google Gemini LLM provider implementation for plan generation
// ABOUTME: Sends generateContent requests with sampling parameters and maps API failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! # Gemini Provider
//!
//! Implementation of the `LlmProvider` trait for Google's Gemini models.
//!
//! ## Configuration
//!
//! Set the `GEMINI_API_KEY` environment variable with your API key from
//! Google AI Studio: <https://makersuite.google.com/app/apikey>
//!
//! The key travels in the `x-goog-api-key` header, never in the URL.
//!
//! ## Models
//!
//! `gemini-2.5-flash` is the default for every coaching feature. Any other
//! `generateContent` model can be chosen per request or through
//! `COACHBOT_MODEL`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use coachbot::llm::{GeminiProvider, LlmProvider, ChatRequest};
//! use coachbot::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GeminiProvider::from_env()?;
//!     let request = ChatRequest::from_prompt("Suggest 3 drills for explosive speed.");
//!     let response = provider.complete(&request).await?;
//!     println!("{}", response.content);
//!     Ok(())
//! }
//! ```

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, field, instrument, warn, Span};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, MessageRole, TokenUsage};
use crate::constants::generation::{DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::errors::{AppError, AppResult};

/// Environment variable for Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Base URL for the Gemini API
pub const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Gemini API request structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// Content structure for Gemini API
#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Part of content; only text parts are produced by coaching prompts
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

/// Generation configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    candidate_count: u32,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    usage_metadata: Option<UsageMetadata>,
    prompt_feedback: Option<PromptFeedback>,
    error: Option<GeminiError>,
}

/// Response candidate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

/// Feedback about the prompt (set when the prompt itself was blocked)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Usage metadata from Gemini API response
#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount")]
    prompt: Option<u32>,
    #[serde(rename = "candidatesTokenCount")]
    candidates: Option<u32>,
    #[serde(rename = "totalTokenCount")]
    total: Option<u32>,
}

/// API error response from Gemini
#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// Google Gemini LLM provider
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    default_model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key and the default timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> AppResult<Self> {
        Self::with_timeout(api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider whose requests give up after `timeout`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key: api_key.into(),
            client,
            default_model: DEFAULT_MODEL.to_owned(),
            base_url: API_BASE_URL.to_owned(),
        })
    }

    /// Create a provider from the `GEMINI_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or blank.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::config(format!("{GEMINI_API_KEY_ENV} environment variable not set"))
            })?;
        Self::new(api_key)
    }

    /// Set a custom default model
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    /// Point the provider at a different API root (used by tests and proxies)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Convert our message role to Gemini's role format
    const fn convert_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::User => "user",
            MessageRole::Assistant => "model",
        }
    }

    /// Build the API URL for a model and method
    fn build_url(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    fn convert_messages(messages: &[ChatMessage]) -> Vec<GeminiContent> {
        messages
            .iter()
            .map(|message| GeminiContent {
                role: Some(Self::convert_role(message.role).to_owned()),
                parts: vec![ContentPart {
                    text: Some(message.content.clone()),
                }],
            })
            .collect()
    }

    /// Build a Gemini API request from a `ChatRequest`
    fn build_gemini_request(request: &ChatRequest) -> GeminiRequest {
        let has_sampling = request.temperature.is_some()
            || request.max_tokens.is_some()
            || request.top_p.is_some()
            || request.top_k.is_some();

        let generation_config = has_sampling.then(|| GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
            top_p: request.top_p,
            top_k: request.top_k,
            candidate_count: 1,
        });

        GeminiRequest {
            contents: Self::convert_messages(&request.messages),
            generation_config,
        }
    }

    /// Concatenate every text part of the first candidate
    ///
    /// Returns an empty string when there is no candidate or no text, which
    /// the generation client reports as an unavailable answer.
    fn extract_content(response: &GeminiResponse) -> String {
        response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Convert usage metadata to our token usage format
    fn convert_usage(metadata: &UsageMetadata) -> TokenUsage {
        TokenUsage {
            prompt_tokens: metadata.prompt.unwrap_or(0),
            completion_tokens: metadata.candidates.unwrap_or(0),
            total_tokens: metadata.total.unwrap_or(0),
        }
    }

    /// Map a transport failure (no HTTP response) to an error
    ///
    /// The URL is stripped from the message so request details never reach
    /// user-visible text.
    fn map_transport_error(error: reqwest::Error) -> AppError {
        let error = error.without_url();
        if error.is_timeout() {
            AppError::timeout(format!("Gemini request timed out: {error}"))
        } else {
            AppError::external_unavailable(format!("HTTP request failed: {error}"))
        }
    }

    /// Map API error status to appropriate error type
    ///
    /// For rate limit (429) and quota errors, returns a user-friendly error
    /// that exposes the actual message from Gemini. Invalid keys come back as
    /// 400 with an "API key not valid" message, or as 401/403.
    fn map_api_error(status: StatusCode, response_text: &str) -> AppError {
        let message = serde_json::from_str::<GeminiResponse>(response_text)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| response_text.to_owned(), |e| e.message);

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                AppError::rate_limited(Self::extract_quota_message(&message))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AppError::auth_failed(format!("Gemini rejected the API key: {message}"))
            }
            StatusCode::BAD_REQUEST if message.to_lowercase().contains("api key") => {
                AppError::auth_failed(message)
            }
            _ => AppError::external_service(
                "Gemini",
                format!("API error ({}): {message}", status.as_u16()),
            ),
        }
    }

    /// Extract a user-friendly quota/rate limit message from Gemini error
    fn extract_quota_message(message: &str) -> String {
        // Example: "Please retry in 6.406453963s."
        const RETRY_PREFIX: &str = "Please retry in ";
        if let Some(retry_pos) = message.find(RETRY_PREFIX) {
            let after_prefix = &message[retry_pos + RETRY_PREFIX.len()..];
            if let Some(s_pos) = after_prefix.find('s') {
                if let Ok(seconds) = after_prefix[..s_pos].parse::<f64>() {
                    let seconds_int = seconds.ceil() as u64;
                    return format!(
                        "AI service quota exceeded. Please try again in {seconds_int} seconds."
                    );
                }
            }
        }
        "AI service quota exceeded. Please wait a moment and try again.".to_owned()
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(skip(self, request), fields(model = field::Empty))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.default_model);
        Span::current().record("model", model);
        let url = self.build_url(model, "generateContent");

        let gemini_request = Self::build_gemini_request(request);

        debug!("Sending request to Gemini API");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&gemini_request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(Self::map_transport_error)?;

        if !status.is_success() {
            error!(status = %status, "Gemini API error");
            return Err(Self::map_api_error(status, &response_text));
        }

        let gemini_response: GeminiResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                AppError::serialization(format!("Failed to parse Gemini response: {e}"))
            })?;

        if let Some(error) = gemini_response.error {
            return Err(AppError::external_service("Gemini", error.message));
        }

        let content = Self::extract_content(&gemini_response);
        let finish_reason = gemini_response
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.finish_reason.clone());
        let block_reason = gemini_response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason);

        if content.trim().is_empty() {
            warn!(
                finish_reason = ?finish_reason,
                block_reason = ?block_reason,
                "Gemini returned no usable content"
            );
        } else {
            debug!("Successfully received Gemini response");
        }

        Ok(ChatResponse {
            content,
            model: model.to_owned(),
            usage: gemini_response
                .usage_metadata
                .as_ref()
                .map(Self::convert_usage),
            finish_reason,
            block_reason,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        // Listing models is the cheapest call that validates the key
        let url = format!("{}/models", self.base_url);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(true);
        }
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            warn!(status = %status, "Gemini rejected the API key");
            return Ok(false);
        }

        let response_text = response.text().await.unwrap_or_default();
        Err(Self::map_api_error(status, &response_text))
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("default_model", &self.default_model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
