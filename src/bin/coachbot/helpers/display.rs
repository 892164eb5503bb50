// ABOUTME: Output formatting helpers for the coachbot CLI
// ABOUTME: Prints plan reports, reference tables, session history, and the landing page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use coachbot::coaching::{Feature, LandingInfo, PlanReport};
use coachbot::generation::GenerationOutcome;
use coachbot::session::CoachingSession;
use coachbot::tables::ReferenceSheet;

const RULE_WIDTH: usize = 80;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Landing page shown when no API key is configured
pub fn display_landing(info: &LandingInfo) {
    println!("\n{}", rule());
    println!("{info}");
    println!("{}", rule());
}

/// Generated plan (or failure) followed by its reference tables
pub fn display_report(report: &PlanReport) {
    println!("\n{}", rule());
    println!("{}", report.feature.display_name());
    println!("{}", rule());
    println!("{}", report.text);

    if let Some(hint) = report.hint {
        println!("\nHint: {hint}");
    }
    if let GenerationOutcome::Generated { model, .. } = &report.outcome {
        println!("\n(model: {model})");
    }

    if let Some(sheet) = &report.tables {
        display_tables(sheet);
    }
}

/// Reference tables under a heading
pub fn display_tables(sheet: &ReferenceSheet) {
    println!("\n{}", rule());
    println!("Training Tables & Schedules ({} layout)", sheet.layout);
    println!("{}", rule());
    println!("{sheet}");
}

/// Most recent plans of the session, newest first
pub fn display_previous_plans(session: &CoachingSession) {
    if session.is_empty() {
        return;
    }
    println!("\nPrevious Plans");
    println!("{}", "-".repeat(RULE_WIDTH));
    for entry in session.previous_plans() {
        println!(
            "[{}] {} ({})",
            entry.formatted_timestamp(),
            entry.feature.display_name(),
            entry.status.as_str()
        );
        println!("    {}", entry.preview());
    }
}

/// The feature catalog with selector numbers
pub fn display_features() {
    println!("Available coaching features:\n");
    for feature in Feature::ALL {
        let layout = feature.reference_layout();
        match feature.number() {
            Some(number) => println!("  {number:>2}  {}  [{layout}]", feature.display_name()),
            None => println!("   -  {}  [{layout}]", feature.display_name()),
        }
    }
    println!("\nSelect a feature by number (e.g. --feature 4) or by name.");
}
