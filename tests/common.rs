// ABOUTME: Shared test utilities for CoachBot integration tests
// ABOUTME: Provides quiet logging, sample profiles, and a scripted LLM provider double
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `coachbot`

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use coachbot::errors::AppError;
use coachbot::llm::{ChatRequest, ChatResponse, LlmProvider};
use coachbot::models::{FitnessLevel, ProfileRecord};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 15 year old intermediate striker
pub fn striker_profile() -> ProfileRecord {
    ProfileRecord::builder()
        .name("Sam")
        .age(15)
        .sport("Football/Soccer")
        .position("Forward/Striker")
        .fitness_level(FitnessLevel::Intermediate)
        .build()
        .unwrap()
}

/// One scripted reply
pub enum Reply {
    Text(&'static str),
    Empty { finish_reason: &'static str },
    Error(AppError),
}

/// Provider double returning scripted replies and recording prompts.
///
/// When the script runs out every call answers "Generated plan".
#[derive(Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<ChatRequest>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .and_then(|r| r.messages.first())
            .map(|m| m.content.clone())
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let reply = self.replies.lock().unwrap().pop_front();
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| "scripted-model".to_owned());
        match reply {
            None => Ok(text_response("Generated plan", model)),
            Some(Reply::Text(text)) => Ok(text_response(text, model)),
            Some(Reply::Empty { finish_reason }) => Ok(ChatResponse {
                content: String::new(),
                model,
                usage: None,
                finish_reason: Some(finish_reason.to_owned()),
                block_reason: None,
            }),
            Some(Reply::Error(err)) => Err(err),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}

fn text_response(text: &str, model: String) -> ChatResponse {
    ChatResponse {
        content: text.to_owned(),
        model,
        usage: None,
        finish_reason: Some("STOP".to_owned()),
        block_reason: None,
    }
}
