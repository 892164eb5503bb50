// ABOUTME: Key check command for the coachbot CLI
// ABOUTME: Verifies the configured Gemini API key with a lightweight request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use coachbot::coaching::{CoachBot, KeyStatus};
use coachbot::errors::{AppError, AppResult};
use tracing::error;

/// Verify the API key and report the result
pub async fn run(coach: &CoachBot) -> AppResult<()> {
    match coach.check_key().await {
        KeyStatus::Accepted => {
            println!("API key configured successfully.");
            Ok(())
        }
        KeyStatus::Missing => {
            println!("No API key configured. Set GEMINI_API_KEY or pass --api-key.");
            Err(AppError::config("GEMINI_API_KEY is not set"))
        }
        KeyStatus::Failed(err) => {
            error!(kind = ?err.kind, "API key check failed");
            println!("{err}");
            println!("{}", err.hint());
            Err(AppError::new(err.code, err.message))
        }
    }
}
