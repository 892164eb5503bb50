// ABOUTME: Integration tests for the per-session plan history
// ABOUTME: Validates ordering, the previous-plans limit, previews, and timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Local, TimeZone};
use coachbot::coaching::Feature;
use coachbot::generation::{GenerationOutcome, OutcomeStatus};
use coachbot::session::{CoachingSession, HistoryEntry};

fn generated(text: &str) -> GenerationOutcome {
    GenerationOutcome::Generated {
        text: text.to_owned(),
        model: "gemini-2.5-flash".to_owned(),
        finish_reason: Some("STOP".to_owned()),
    }
}

#[test]
fn test_new_session_is_empty() {
    let session = CoachingSession::new();
    assert!(session.is_empty());
    assert_eq!(session.len(), 0);
    assert_eq!(session.previous_plans().count(), 0);
    assert_ne!(session.id(), CoachingSession::new().id());
}

#[test]
fn test_previous_plans_are_newest_first_and_limited() {
    let mut session = CoachingSession::new();
    for (idx, feature) in Feature::NUMBERED.iter().enumerate().take(7) {
        session.record(HistoryEntry::new(*feature, &generated(&format!("plan {idx}"))));
    }

    assert_eq!(session.len(), 7);
    let responses: Vec<&str> = session
        .previous_plans()
        .map(|entry| entry.response.as_str())
        .collect();
    assert_eq!(
        responses,
        vec!["plan 6", "plan 5", "plan 4", "plan 3", "plan 2"]
    );

    assert_eq!(session.recent(2).count(), 2);
    assert_eq!(session.recent(50).count(), 7);
    assert_eq!(session.history()[0].response, "plan 0");
}

#[test]
fn test_preview_truncates_to_200_chars() {
    let long = "x".repeat(500);
    let entry = HistoryEntry::new(Feature::Hydration, &generated(&long));
    let preview = entry.preview();
    assert_eq!(preview.chars().count(), 203);
    assert!(preview.ends_with("..."));

    let short = HistoryEntry::new(Feature::Hydration, &generated("Drink water"));
    assert_eq!(short.preview(), "Drink water...");

    let unicode = HistoryEntry::new(Feature::Hydration, &generated(&"é".repeat(300)));
    assert_eq!(unicode.preview().chars().count(), 203);
}

#[test]
fn test_entry_records_status_and_timestamp() {
    let at = Local.with_ymd_and_hms(2025, 6, 1, 7, 30, 9).unwrap();
    let unavailable = GenerationOutcome::Unavailable {
        finish_reason: None,
    };
    let entry = HistoryEntry::at(Feature::MentalFocus, &unavailable, at);

    assert_eq!(entry.status, OutcomeStatus::Unavailable);
    assert_eq!(entry.formatted_timestamp(), "2025-06-01 07:30:09");
    assert_eq!(entry.response, unavailable.display_text());
    assert_eq!(entry.feature, Feature::MentalFocus);
}
