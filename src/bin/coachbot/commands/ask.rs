// ABOUTME: Ask command for the coachbot CLI
// ABOUTME: Sends a free-text coach question with an advice intensity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use coachbot::coaching::{CoachBot, PlanRequest, Submission};
use coachbot::errors::AppResult;
use coachbot::models::ProfileRecord;
use coachbot::session::CoachingSession;

use crate::helpers::display::{display_landing, display_report};

/// Ask the coach one question
pub async fn run(
    coach: &CoachBot,
    profile: &ProfileRecord,
    question: String,
    intensity: u8,
) -> AppResult<()> {
    let mut session = CoachingSession::new();
    let request = PlanRequest::custom_question(question, profile).with_advice_intensity(intensity);

    match coach.submit(&mut session, request).await? {
        Submission::Landing(landing) => display_landing(&landing),
        Submission::Plan(report) => display_report(&report),
    }
    Ok(())
}
