// ABOUTME: Plan command for the coachbot CLI
// ABOUTME: Runs one or more coaching features in a single session and optionally exports the plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use std::path::Path;

use chrono::Local;
use coachbot::coaching::{CoachBot, Feature, PlanRequest, Submission};
use coachbot::errors::AppResult;
use coachbot::export::export_plan;
use coachbot::models::ProfileRecord;
use coachbot::session::CoachingSession;
use tracing::{info, warn};

use crate::helpers::display::{display_landing, display_previous_plans, display_report};

/// Flags shared by every feature in one `plan` run
pub struct PlanOptions {
    pub notes: Option<String>,
    pub temperature: Option<f32>,
    pub no_tables: bool,
    pub weeks: Option<usize>,
    pub export: bool,
}

/// Generate a plan for each feature in order
pub async fn run(
    coach: &CoachBot,
    profile: &ProfileRecord,
    features: &[Feature],
    options: &PlanOptions,
    export_dir: &Path,
) -> AppResult<()> {
    let mut session = CoachingSession::new();
    let mut exported = Vec::new();

    for &feature in features {
        info!(feature = %feature, "Requesting plan");
        let mut request = PlanRequest::new(feature, profile);
        if let Some(notes) = &options.notes {
            request = request.with_notes(notes.clone());
        }
        if let Some(temperature) = options.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(weeks) = options.weeks {
            request = request.with_weeks(weeks);
        }
        if options.no_tables {
            request = request.without_tables();
        }

        match coach.submit(&mut session, request).await? {
            Submission::Landing(landing) => {
                display_landing(&landing);
                return Ok(());
            }
            Submission::Plan(report) => {
                display_report(&report);
                if report.outcome.is_generated() {
                    exported.push(format!(
                        "{}\n\n{}",
                        report.feature.display_name(),
                        report.text
                    ));
                }
            }
        }
    }

    display_previous_plans(&session);

    if options.export {
        if exported.is_empty() {
            warn!("Nothing to export: no plan was generated");
        } else {
            let path = export_plan(export_dir, &exported.join("\n\n"), &Local::now()).await?;
            println!("\nPlan exported to {}", path.display());
        }
    }

    Ok(())
}
