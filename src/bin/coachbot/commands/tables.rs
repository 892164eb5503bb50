// ABOUTME: Tables command for the coachbot CLI
// ABOUTME: Prints the reference tables for a feature without calling the model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use coachbot::coaching::Feature;
use coachbot::models::{ProfileRecord, TrainingIntensity};
use coachbot::tables::{reference_sheet, TableOptions};
use tracing::debug;

use crate::helpers::display::display_tables;

/// Overrides for the profile-derived table options
pub struct TableOverrides {
    pub intensity: Option<TrainingIntensity>,
    pub weeks: Option<usize>,
    pub hours: Option<f64>,
    pub minutes: Option<u32>,
}

/// Print the reference sheet for `feature`
pub fn run(feature: Feature, profile: &ProfileRecord, overrides: &TableOverrides) {
    let mut options = TableOptions::from_profile(profile);
    if let Some(intensity) = overrides.intensity {
        options = options.with_intensity(intensity);
    }
    if let Some(weeks) = overrides.weeks {
        options = options.with_weeks(weeks);
    }
    if let Some(hours) = overrides.hours {
        options.weekly_hours = hours;
    }
    if let Some(minutes) = overrides.minutes {
        options.session_minutes = minutes;
    }

    let layout = feature.reference_layout();
    debug!(%layout, ?options, "Building reference tables");
    println!("{}", feature.display_name());
    display_tables(&reference_sheet(layout, &options));
}
