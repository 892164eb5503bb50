// ABOUTME: Maps coaching features to the set of reference tables shown under a plan
// ABOUTME: Priority-ordered keyword routing table and the reference sheet assembler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use std::fmt;

use serde::Serialize;

use crate::models::{ProfileRecord, TrainingIntensity};

use super::{
    endurance_training_types, exercise_routine, general_distribution, injury_recovery_timeline,
    meal_calorie_distribution, nutrition_macros, progress_tracking, recovery_activities,
    session_phase_split, training_distribution, weekly_meal_plan, weekly_training_schedule, Table,
    MAX_PROGRESS_WEEKS, MIN_PROGRESS_WEEKS,
};

/// Default weekly training volume used for the distribution hours
pub const DEFAULT_WEEKLY_HOURS: f64 = 10.0;
/// Default length of the progress tracking table
pub const DEFAULT_PROGRESS_WEEKS: usize = 8;
/// Length of the endurance progress plan
pub const ENDURANCE_PROGRESS_WEEKS: usize = 12;
/// Default session length for the phase split
pub const DEFAULT_SESSION_MINUTES: u32 = 60;

/// Which group of reference tables accompanies a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceLayout {
    /// Exercise routine, training distribution, progress tracking
    Strength,
    /// Macros, meal calorie split, weekly meal plan
    Nutrition,
    /// Recovery timeline, recovery activities, strength/endurance progress
    Recovery,
    /// Endurance training types, training distribution, 12-week plan
    Endurance,
    /// Generic distribution and strength/skill progress
    General,
    /// Schedule and training distribution only (custom questions)
    QuickReference,
}

/// Keyword groups checked against a feature name, first match wins.
///
/// Matching is a case-sensitive substring test, so "Training" matches
/// "Safe Recovery Training Schedule" before "Recovery" gets a chance.
pub const KEYWORD_ROUTES: &[(&[&str], ReferenceLayout)] = &[
    (
        &["Workout", "Training", "Strength"],
        ReferenceLayout::Strength,
    ),
    (&["Nutrition"], ReferenceLayout::Nutrition),
    (&["Recovery", "Mobility"], ReferenceLayout::Recovery),
    (&["Endurance", "Speed"], ReferenceLayout::Endurance),
];

impl ReferenceLayout {
    /// Route a free-form feature name through [`KEYWORD_ROUTES`]
    #[must_use]
    pub fn route(feature_name: &str) -> Self {
        KEYWORD_ROUTES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| feature_name.contains(k)))
            .map_or(Self::General, |(_, layout)| *layout)
    }

    /// Short name used in listings
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Nutrition => "nutrition",
            Self::Recovery => "recovery",
            Self::Endurance => "endurance",
            Self::General => "general",
            Self::QuickReference => "quick-reference",
        }
    }
}

impl fmt::Display for ReferenceLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile-derived knobs for the generators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableOptions {
    /// Added to each baked schedule intensity before clamping
    pub intensity_shift: i64,
    /// Weekly hours the training distribution is scaled to
    pub weekly_hours: f64,
    /// Rows in the progress tracking table
    pub weeks: usize,
    /// Session length for the phase split
    pub session_minutes: u32,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            intensity_shift: 0,
            weekly_hours: DEFAULT_WEEKLY_HOURS,
            weeks: DEFAULT_PROGRESS_WEEKS,
            session_minutes: DEFAULT_SESSION_MINUTES,
        }
    }
}

impl TableOptions {
    /// Baked baseline with the athlete's session length for the phase split
    #[must_use]
    pub fn from_profile(profile: &ProfileRecord) -> Self {
        Self {
            session_minutes: profile.training_duration().minutes(),
            ..Self::default()
        }
    }

    /// Shift the weekly schedule to a chosen training intensity
    #[must_use]
    pub const fn with_intensity(mut self, intensity: TrainingIntensity) -> Self {
        self.intensity_shift = intensity.schedule_shift();
        self
    }

    /// Override the progress table length, clamped to the supported range
    #[must_use]
    pub fn with_weeks(mut self, weeks: usize) -> Self {
        self.weeks = weeks.clamp(MIN_PROGRESS_WEEKS, MAX_PROGRESS_WEEKS);
        self
    }
}

/// A table with its display heading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitledTable {
    /// Heading shown above the table
    pub title: String,
    /// Table contents
    pub table: Table,
}

impl TitledTable {
    fn new(title: impl Into<String>, table: Table) -> Self {
        Self {
            title: title.into(),
            table,
        }
    }
}

/// Ordered reference tables for one plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceSheet {
    /// Layout the sheet was built from
    pub layout: ReferenceLayout,
    /// Tables in display order, weekly schedule first
    pub tables: Vec<TitledTable>,
}

impl fmt::Display for ReferenceSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, titled) in self.tables.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            writeln!(f, "### {}", titled.title)?;
            write!(f, "{}", titled.table)?;
        }
        Ok(())
    }
}

/// Assemble the reference tables for a layout
#[must_use]
pub fn reference_sheet(layout: ReferenceLayout, options: &TableOptions) -> ReferenceSheet {
    let mut tables = vec![TitledTable::new(
        "Weekly Training Schedule",
        weekly_training_schedule(options.intensity_shift),
    )];

    match layout {
        ReferenceLayout::Strength => {
            let progress = progress_tracking(options.weeks);
            tables.push(TitledTable::new("Exercise Routine", exercise_routine()));
            tables.push(TitledTable::new(
                "Training Distribution",
                training_distribution(options.weekly_hours),
            ));
            tables.push(TitledTable::new(
                format!("{}-Week Progress Tracking", progress.row_count()),
                progress,
            ));
        }
        ReferenceLayout::Nutrition => {
            tables.push(TitledTable::new("Macro Breakdown", nutrition_macros()));
            tables.push(TitledTable::new(
                "Meal Calorie Distribution",
                meal_calorie_distribution(),
            ));
            tables.push(TitledTable::new("Weekly Meal Plan", weekly_meal_plan()));
        }
        ReferenceLayout::Recovery => {
            tables.push(TitledTable::new(
                "Recovery Timeline",
                injury_recovery_timeline(),
            ));
            tables.push(TitledTable::new(
                "Recovery Activities",
                recovery_activities(),
            ));
            tables.push(TitledTable::new(
                "Progress Tracking",
                progress_tracking(options.weeks).select(&["Week", "Strength (%)", "Endurance (%)"]),
            ));
        }
        ReferenceLayout::Endurance => {
            tables.push(TitledTable::new(
                "Training Types",
                endurance_training_types(),
            ));
            tables.push(TitledTable::new(
                "Training Distribution",
                training_distribution(options.weekly_hours),
            ));
            tables.push(TitledTable::new(
                format!("{ENDURANCE_PROGRESS_WEEKS}-Week Progress Plan"),
                progress_tracking(ENDURANCE_PROGRESS_WEEKS),
            ));
        }
        ReferenceLayout::General => {
            tables.push(TitledTable::new(
                "Training Distribution",
                general_distribution(),
            ));
            tables.push(TitledTable::new(
                "Progress Tracking",
                progress_tracking(options.weeks).select(&[
                    "Week",
                    "Strength (%)",
                    "Skill Level (%)",
                ]),
            ));
        }
        ReferenceLayout::QuickReference => {
            tables.push(TitledTable::new(
                "Training Distribution",
                training_distribution(options.weekly_hours),
            ));
            return ReferenceSheet { layout, tables };
        }
    }

    tables.push(TitledTable::new(
        "Session Phase Split",
        session_phase_split(options.session_minutes),
    ));
    ReferenceSheet { layout, tables }
}
