// ABOUTME: Deterministic generators for the illustrative reference tables
// ABOUTME: Baked sample data plus simple derived columns (hours, progression, phase minutes)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! Table generators.
//!
//! The numbers are sample data for display, not physiological guidance.
//! Every generator is pure: the same arguments always yield the same table.

use super::{Column, Table};

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// (focus, duration, base intensity on a 1-10 scale)
const WEEKLY_SESSIONS: [(&str, &str, i64); 7] = [
    ("Strength Training", "60 min", 8),
    ("Cardio/Endurance", "45 min", 6),
    ("Sport-Specific Skills", "75 min", 9),
    ("Recovery/Mobility", "30 min", 5),
    ("Strength + Conditioning", "60 min", 7),
    ("Light Cardio", "30 min", 4),
    ("Rest/Active Recovery", "20 min", 2),
];

const TRAINING_SHARES: [(&str, i64); 5] = [
    ("Strength Training", 30),
    ("Cardio/Endurance", 25),
    ("Skill Work", 25),
    ("Flexibility/Mobility", 10),
    ("Rest/Recovery", 10),
];

const MIN_INTENSITY: i64 = 1;
const MAX_INTENSITY: i64 = 10;

/// Baked progress series for the first twelve weeks
const STRENGTH_SERIES: [i64; 12] = [20, 30, 42, 55, 65, 75, 82, 90, 92, 94, 95, 96];
const ENDURANCE_SERIES: [i64; 12] = [25, 35, 45, 58, 68, 76, 84, 92, 93, 94, 95, 96];
const SKILL_SERIES: [i64; 12] = [30, 38, 48, 58, 68, 76, 83, 89, 90, 91, 92, 93];
const BODY_WEIGHT_SERIES: [f64; 12] = [
    70.0, 70.5, 71.0, 71.2, 71.5, 71.8, 72.0, 72.2, 72.3, 72.4, 72.5, 72.6,
];
const PROGRESS_NOTES: [&str; 12] = [
    "Baseline",
    "Good progress",
    "Increasing intensity",
    "Maintaining form",
    "Peak week",
    "Recovery focus",
    "Final push",
    "Assessment week",
    "Consolidation",
    "Advanced",
    "Elite",
    "Peak",
];

/// Shortest progress table
pub const MIN_PROGRESS_WEEKS: usize = 1;
/// Longest progress table, one training year
pub const MAX_PROGRESS_WEEKS: usize = 52;

/// Progression past the baked series: `min(cap, last + increment * k)`
const PERCENT_CAP: i64 = 100;
const PERCENT_INCREMENT: i64 = 1;
const BODY_WEIGHT_CAP: f64 = 75.0;
const BODY_WEIGHT_INCREMENT: f64 = 0.1;
const EXTENDED_NOTE: &str = "Maintenance";

/// Warm-up / core / recovery proportions of one session
const SESSION_PHASES: [(&str, i64); 3] = [
    ("Warm-up", 20),
    ("Core Training", 65),
    ("Recovery", 15),
];

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn share_of(percentage: i64, total: f64) -> f64 {
    round1(percentage as f64 / 100.0 * total)
}

fn extend_percent(series: &[i64; 12], week: usize) -> i64 {
    match series.get(week) {
        Some(value) => *value,
        None => {
            let last = series[series.len() - 1];
            let steps = i64::try_from(week + 1 - series.len()).unwrap_or(i64::MAX);
            PERCENT_CAP.min(last.saturating_add(PERCENT_INCREMENT.saturating_mul(steps)))
        }
    }
}

fn extend_body_weight(week: usize) -> f64 {
    match BODY_WEIGHT_SERIES.get(week) {
        Some(value) => *value,
        None => {
            let last = BODY_WEIGHT_SERIES[BODY_WEIGHT_SERIES.len() - 1];
            let steps = (week + 1 - BODY_WEIGHT_SERIES.len()) as f64;
            round1(BODY_WEIGHT_CAP.min(last + BODY_WEIGHT_INCREMENT * steps))
        }
    }
}

/// Seven-day schedule with `Day, Focus, Duration, Intensity`.
///
/// Intensity is the baked value shifted by `intensity_shift` and clamped to 1..=10.
#[must_use]
pub fn weekly_training_schedule(intensity_shift: i64) -> Table {
    Table::new(vec![
        Column::new("Day", DAYS),
        Column::new("Focus", WEEKLY_SESSIONS.iter().map(|(focus, _, _)| *focus)),
        Column::new(
            "Duration",
            WEEKLY_SESSIONS.iter().map(|(_, duration, _)| *duration),
        ),
        Column::new(
            "Intensity",
            WEEKLY_SESSIONS
                .iter()
                .map(|(_, _, base)| (base + intensity_shift).clamp(MIN_INTENSITY, MAX_INTENSITY)),
        ),
    ])
}

/// Training type split with hours derived from `weekly_hours`
#[must_use]
pub fn training_distribution(weekly_hours: f64) -> Table {
    Table::new(vec![
        Column::new(
            "Training Type",
            TRAINING_SHARES.iter().map(|(kind, _)| *kind),
        ),
        Column::new(
            "Percentage (%)",
            TRAINING_SHARES.iter().map(|(_, pct)| *pct),
        ),
        Column::new(
            "Hours per Week",
            TRAINING_SHARES
                .iter()
                .map(|(_, pct)| share_of(*pct, weekly_hours)),
        ),
    ])
}

/// Daily macro breakdown
#[must_use]
pub fn nutrition_macros() -> Table {
    Table::new(vec![
        Column::new(
            "Nutrient",
            ["Protein", "Carbohydrates", "Fats", "Total Calories"],
        ),
        Column::new("Percentage", ["30%", "45%", "25%", "100%"]),
        Column::new("Grams per Day", ["150g", "280g", "70g", "-"]),
        Column::new(
            "Calories",
            ["600 kcal", "1120 kcal", "630 kcal", "2350 kcal"],
        ),
    ])
}

/// Share of daily calories per meal
#[must_use]
pub fn meal_calorie_distribution() -> Table {
    Table::new(vec![
        Column::new("Meal", ["Breakfast", "Lunch", "Dinner", "Snacks"]),
        Column::new("Calorie %", [25_i64, 30, 30, 15]),
    ])
}

/// Sample meals for each day of the week
#[must_use]
pub fn weekly_meal_plan() -> Table {
    Table::new(vec![
        Column::new("Day", DAYS),
        Column::new(
            "Breakfast",
            [
                "Oatmeal + Eggs",
                "Greek Yogurt + Fruits",
                "Whole Grain Toast + Avocado",
                "Protein Smoothie",
                "Scrambled Eggs + Veggies",
                "Pancakes + Berries",
                "Omelet + Toast",
            ],
        ),
        Column::new(
            "Lunch",
            [
                "Chicken + Rice + Veggies",
                "Fish + Quinoa Salad",
                "Turkey Wrap + Soup",
                "Pasta + Lean Meat",
                "Grilled Chicken Salad",
                "Rice Bowl + Protein",
                "Sandwich + Fruit",
            ],
        ),
        Column::new(
            "Dinner",
            [
                "Salmon + Sweet Potato",
                "Lean Beef + Brown Rice",
                "Chicken Stir-fry",
                "Fish + Vegetables",
                "Turkey + Quinoa",
                "Grilled Chicken + Pasta",
                "Lean Meat + Rice",
            ],
        ),
        Column::new(
            "Snacks",
            [
                "Protein Bar + Nuts",
                "Fruit + Cheese",
                "Hummus + Veggies",
                "Greek Yogurt",
                "Trail Mix",
                "Protein Shake",
                "Fruit + Nut Butter",
            ],
        ),
    ])
}

/// Strength exercise routine
#[must_use]
pub fn exercise_routine() -> Table {
    Table::new(vec![
        Column::new(
            "Exercise",
            [
                "Squats",
                "Bench Press",
                "Deadlifts",
                "Pull-ups",
                "Shoulder Press",
                "Lunges",
                "Rows",
                "Core Work",
            ],
        ),
        Column::new("Sets", [4_i64, 4, 3, 3, 3, 3, 4, 3]),
        Column::new(
            "Reps",
            [
                "8-10",
                "8-10",
                "6-8",
                "8-12",
                "10-12",
                "10 each leg",
                "10-12",
                "15-20",
            ],
        ),
        Column::new("Rest (sec)", [90_i64, 90, 120, 90, 60, 60, 75, 45]),
        Column::new(
            "Notes",
            [
                "Focus on form",
                "Control the weight",
                "Keep back straight",
                "Use assistance if needed",
                "Full range of motion",
                "Maintain balance",
                "Squeeze at top",
                "Engage core throughout",
            ],
        ),
    ])
}

/// Week-by-week progress for `weeks` weeks.
///
/// The first twelve weeks come from the baked series; later weeks keep
/// climbing by a fixed increment until they reach their cap. `weeks` is
/// clamped to [`MIN_PROGRESS_WEEKS`]..=[`MAX_PROGRESS_WEEKS`].
#[must_use]
pub fn progress_tracking(weeks: usize) -> Table {
    let weeks = weeks.clamp(MIN_PROGRESS_WEEKS, MAX_PROGRESS_WEEKS);
    let week_numbers = (1..=weeks).map(|w| i64::try_from(w).unwrap_or(i64::MAX));
    Table::new(vec![
        Column::new("Week", week_numbers),
        Column::new(
            "Strength (%)",
            (0..weeks).map(|w| extend_percent(&STRENGTH_SERIES, w)),
        ),
        Column::new(
            "Endurance (%)",
            (0..weeks).map(|w| extend_percent(&ENDURANCE_SERIES, w)),
        ),
        Column::new(
            "Skill Level (%)",
            (0..weeks).map(|w| extend_percent(&SKILL_SERIES, w)),
        ),
        Column::new("Body Weight (kg)", (0..weeks).map(extend_body_weight)),
        Column::new(
            "Notes",
            (0..weeks).map(|w| PROGRESS_NOTES.get(w).copied().unwrap_or(EXTENDED_NOTE)),
        ),
    ])
}

/// Phased return-to-training timeline
#[must_use]
pub fn injury_recovery_timeline() -> Table {
    Table::new(vec![
        Column::new(
            "Phase",
            ["Week 1-2", "Week 3-4", "Week 5-6", "Week 7-8", "Week 9+"],
        ),
        Column::new(
            "Focus",
            [
                "Pain Management",
                "Gentle Movement",
                "Strength Building",
                "Sport-Specific Work",
                "Full Training",
            ],
        ),
        Column::new(
            "Intensity",
            [
                "Very Low (2-3/10)",
                "Low (3-4/10)",
                "Moderate (5-6/10)",
                "High (7-8/10)",
                "Full (9-10/10)",
            ],
        ),
        Column::new(
            "Activities",
            [
                "Ice, Rest, Gentle Stretching",
                "Pool Work, Light Mobility",
                "Resistance Bands, Bodyweight",
                "Light Sport Drills",
                "Full Practice",
            ],
        ),
        Column::new(
            "Red Flags",
            [
                "Sharp pain, Swelling",
                "Persistent pain",
                "Limited ROM",
                "Pain during sport moves",
                "Recurring issues",
            ],
        ),
    ])
}

/// Time split across recovery activities
#[must_use]
pub fn recovery_activities() -> Table {
    Table::new(vec![
        Column::new(
            "Activity",
            ["Stretching", "Foam Rolling", "Low Impact Cardio", "Rest"],
        ),
        Column::new("Time %", [30_i64, 20, 25, 25]),
    ])
}

/// Split of endurance work by training type
#[must_use]
pub fn endurance_training_types() -> Table {
    Table::new(vec![
        Column::new(
            "Type",
            [
                "Interval Training",
                "Long Distance",
                "Speed Work",
                "Recovery Runs",
            ],
        ),
        Column::new("Percentage %", [35_i64, 30, 20, 15]),
    ])
}

/// Generic split between physical, skill, mental and recovery work
#[must_use]
pub fn general_distribution() -> Table {
    Table::new(vec![
        Column::new(
            "Category",
            [
                "Physical Training",
                "Skill Development",
                "Mental Training",
                "Recovery",
            ],
        ),
        Column::new("Percentage %", [40_i64, 30, 15, 15]),
    ])
}

/// Warm-up / core / recovery proportions of a session of `duration_minutes`
#[must_use]
pub fn session_phase_split(duration_minutes: u32) -> Table {
    let total = f64::from(duration_minutes);
    Table::new(vec![
        Column::new("Phase", SESSION_PHASES.iter().map(|(phase, _)| *phase)),
        Column::new("Share (%)", SESSION_PHASES.iter().map(|(_, pct)| *pct)),
        Column::new(
            "Minutes",
            SESSION_PHASES.iter().map(|(_, pct)| share_of(*pct, total)),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Cell;

    #[test]
    fn test_share_of_rounds_to_one_decimal() {
        assert!((share_of(30, 10.0) - 3.0).abs() < f64::EPSILON);
        assert!((share_of(25, 7.5) - 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_schedule_intensity_is_clamped() {
        let table = weekly_training_schedule(5);
        let intensity = table.column("Intensity").unwrap();
        assert!(intensity
            .values
            .iter()
            .all(|c| matches!(c, Cell::Int(v) if *v <= 10)));
        assert_eq!(intensity.values[0], Cell::Int(10));

        let table = weekly_training_schedule(-5);
        let intensity = table.column("Intensity").unwrap();
        assert_eq!(intensity.values[6], Cell::Int(1));
    }

    #[test]
    fn test_progress_extends_past_baked_series() {
        let table = progress_tracking(16);
        assert_eq!(table.row_count(), 16);
        let strength = table.column("Strength (%)").unwrap();
        assert_eq!(strength.values[11], Cell::Int(96));
        assert_eq!(strength.values[12], Cell::Int(97));
        assert_eq!(strength.values[15], Cell::Int(100));
        let notes = table.column("Notes").unwrap();
        assert_eq!(notes.values[12], Cell::Text("Maintenance".to_owned()));
    }

    #[test]
    fn test_session_phase_minutes() {
        let table = session_phase_split(60);
        let minutes = table.column("Minutes").unwrap();
        assert_eq!(minutes.values[0], Cell::Float(12.0));
        assert_eq!(minutes.values[1], Cell::Float(39.0));
        assert_eq!(minutes.values[2], Cell::Float(9.0));
    }
}
