// ABOUTME: LLM provider abstraction layer for the hosted text-generation model
// ABOUTME: Defines the provider contract, request/response types, and sampling parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! # LLM Provider Interface
//!
//! This module defines the contract a text-generation backend implements. The
//! generation client only ever talks to `dyn LlmProvider`, which keeps the
//! Gemini HTTP details in one place and lets tests substitute a double.
//!
//! ## Key Concepts
//!
//! - **`LlmProvider`**: Async trait for a single, non-streaming completion
//! - **`ChatMessage`**: Role-based message structure
//! - **`ChatRequest`**: Prompt plus sampling parameters (temperature, top-p, top-k)
//!
//! ## Example: Using a Provider
//!
//! ```rust,no_run
//! use coachbot::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![ChatMessage::user("Suggest a warm-up")])
//!         .with_temperature(0.5)
//!         .with_max_tokens(8192);
//!     let response = provider.complete(&request).await;
//! }
//! ```

mod gemini;
pub mod prompts;

pub use gemini::{GeminiProvider, API_BASE_URL, GEMINI_API_KEY_ENV};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ============================================================================
// Message Types
// ============================================================================

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User input message
    User,
    /// Model response message
    Assistant,
}

/// A single message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Configuration for a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Model identifier (provider-specific)
    pub model: Option<String>,
    /// Temperature for response randomness (0.0 - 1.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Nucleus sampling probability mass
    pub top_p: Option<f32>,
    /// Number of highest-probability tokens considered
    pub top_k: Option<u32>,
}

impl ChatRequest {
    /// Create a new request with messages
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
            top_p: None,
            top_k: None,
        }
    }

    /// Create a request holding a single user prompt
    #[must_use]
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self::new(vec![ChatMessage::user(prompt)])
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from a completion
///
/// `content` is empty when the model produced no usable candidate, for
/// example when the prompt or the answer was blocked by safety filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated text (all text parts of the first candidate)
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (STOP, MAX_TOKENS, SAFETY, ...)
    pub finish_reason: Option<String>,
    /// Reason the prompt was blocked, if it was
    pub block_reason: Option<String>,
}

impl ChatResponse {
    /// Whether the response carries any non-whitespace text
    #[must_use]
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// LLM provider trait for text generation
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Perform one completion call
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;

    /// Check if the API key is accepted by the provider
    async fn health_check(&self) -> Result<bool, AppError>;
}
