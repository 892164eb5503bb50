// ABOUTME: Main library entry point for the CoachBot coaching assistant
// ABOUTME: Prompt building, Gemini generation, sanitizing, reference tables, and session history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

#![deny(unsafe_code)]

//! # CoachBot
//!
//! CoachBot turns an athlete profile into a coaching plan. The profile is
//! rendered into a natural-language prompt for one of a fixed catalog of
//! coaching features, the prompt is sent to a hosted Gemini model, and the
//! reply is shown next to deterministic reference tables.
//!
//! ## Pipeline
//!
//! Profile → [`coaching::build_prompt`] → [`generation::GenerationClient`] →
//! [`sanitizer::sanitize`] → display + [`session::CoachingSession`].
//! The [`tables`] generators run independently, driven only by the feature.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coachbot::coaching::{CoachBot, Feature, PlanRequest, Submission};
//! use coachbot::config::CoachConfig;
//! use coachbot::errors::AppResult;
//! use coachbot::models::ProfileRecord;
//! use coachbot::session::CoachingSession;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = CoachConfig::from_env()?;
//!     let coach = CoachBot::from_config(&config)?;
//!     let mut session = CoachingSession::new();
//!
//!     let profile = ProfileRecord::builder()
//!         .sport("Football")
//!         .position("Striker")
//!         .age(15)
//!         .build()?;
//!
//!     let request = PlanRequest::new(Feature::FullBodyWorkout, &profile);
//!     if let Submission::Plan(report) = coach.submit(&mut session, request).await? {
//!         println!("{}", report.text);
//!     }
//!     Ok(())
//! }
//! ```

/// Feature catalog, prompt builder, and submission handler
pub mod coaching;

/// Environment-based configuration
pub mod config;

/// Unified error handling (re-exported from `coachbot-core`)
pub mod errors;

/// Plain-text plan export
pub mod export;

/// Soft-fail generation client with typed outcomes
pub mod generation;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Cosmetic cleanup of model output
pub mod sanitizer;

/// Per-session history of generated plans
pub mod session;

/// Deterministic reference tables shown next to generated plans
pub mod tables;

pub use coachbot_core::{constants, models};
