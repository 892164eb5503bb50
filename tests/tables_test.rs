// ABOUTME: Integration tests for reference table generation and routing
// ABOUTME: Validates rectangular tables, determinism, the weekly schedule, and keyword routing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coachbot::coaching::Feature;
use coachbot::models::{ProfileRecord, SessionDuration, TrainingIntensity};
use coachbot::tables::{
    progress_tracking, reference_sheet, session_phase_split, training_distribution,
    weekly_training_schedule, Cell, ReferenceLayout, ReferenceSheet, Table, TableOptions,
    MAX_PROGRESS_WEEKS,
};

const ALL_LAYOUTS: [ReferenceLayout; 6] = [
    ReferenceLayout::Strength,
    ReferenceLayout::Nutrition,
    ReferenceLayout::Recovery,
    ReferenceLayout::Endurance,
    ReferenceLayout::General,
    ReferenceLayout::QuickReference,
];

fn assert_rectangular(table: &Table, context: &str) {
    let rows = table.row_count();
    assert!(rows > 0, "{context}: empty table");
    for column in table.columns() {
        assert_eq!(
            column.len(),
            rows,
            "{context}: column '{}' has {} values, expected {rows}",
            column.name,
            column.len()
        );
    }
}

fn assert_sheet_rectangular(sheet: &ReferenceSheet, context: &str) {
    assert!(!sheet.tables.is_empty(), "{context}: no tables");
    for titled in &sheet.tables {
        assert_rectangular(&titled.table, &format!("{context} / {}", titled.title));
    }
}

#[test]
fn test_every_feature_yields_rectangular_tables() {
    let options = TableOptions::default();
    for feature in Feature::ALL {
        let sheet = reference_sheet(feature.reference_layout(), &options);
        assert_sheet_rectangular(&sheet, feature.display_name());
    }
}

#[test]
fn test_unknown_feature_name_uses_general_layout() {
    let layout = ReferenceLayout::route("Zumba for goalkeepers");
    assert_eq!(layout, ReferenceLayout::General);
    assert_sheet_rectangular(
        &reference_sheet(layout, &TableOptions::default()),
        "unrecognized feature",
    );
}

#[test]
fn test_rectangular_across_option_ranges() {
    for layout in ALL_LAYOUTS {
        for weeks in [1, 8, 12, 20] {
            for shift in [-1, 0, 1] {
                let options = TableOptions {
                    intensity_shift: shift,
                    weekly_hours: 3.5,
                    weeks,
                    session_minutes: 45,
                };
                assert_sheet_rectangular(
                    &reference_sheet(layout, &options),
                    &format!("{layout} weeks={weeks} shift={shift}"),
                );
            }
        }
    }
}

#[test]
fn test_weekly_schedule_shape() {
    let schedule = weekly_training_schedule(0);
    assert_eq!(schedule.row_count(), 7);
    assert_eq!(
        schedule.column_names(),
        vec!["Day", "Focus", "Duration", "Intensity"]
    );
    assert_eq!(
        schedule.column("Day").unwrap().values.first(),
        Some(&Cell::Text("Monday".to_owned()))
    );
}

#[test]
fn test_schedule_intensity_stays_in_range() {
    for shift in [-20, -1, 0, 1, 20] {
        let schedule = weekly_training_schedule(shift);
        for value in &schedule.column("Intensity").unwrap().values {
            let Cell::Int(intensity) = value else {
                panic!("intensity should be an integer, got {value:?}");
            };
            assert!((1..=10).contains(intensity));
        }
    }
}

#[test]
fn test_generators_are_deterministic() {
    for weeks in [4, 8, 12, 16] {
        assert_eq!(
            progress_tracking(weeks).to_string(),
            progress_tracking(weeks).to_string()
        );
    }
    assert_eq!(
        training_distribution(7.5).to_string(),
        training_distribution(7.5).to_string()
    );
    assert_eq!(session_phase_split(90), session_phase_split(90));

    let options = TableOptions::default().with_weeks(12);
    for layout in ALL_LAYOUTS {
        assert_eq!(
            reference_sheet(layout, &options).to_string(),
            reference_sheet(layout, &options).to_string()
        );
    }
}

#[test]
fn test_progress_extends_past_baked_weeks() {
    let table = progress_tracking(16);
    assert_eq!(table.row_count(), 16);

    let strength = &table.column("Strength (%)").unwrap().values;
    assert_eq!(strength[11], Cell::Int(96));
    assert_eq!(strength[12], Cell::Int(97));
    assert_eq!(strength[15], Cell::Int(100));

    let notes = &table.column("Notes").unwrap().values;
    assert_eq!(notes[0], Cell::Text("Baseline".to_owned()));
    assert_eq!(notes[12], Cell::Text("Maintenance".to_owned()));

    let weight = &table.column("Body Weight (kg)").unwrap().values;
    let Cell::Float(last) = weight[15] else {
        panic!("body weight should be a float");
    };
    assert!(last <= 75.0);
}

#[test]
fn test_progress_weeks_are_clamped() {
    assert_eq!(
        progress_tracking(usize::MAX).row_count(),
        MAX_PROGRESS_WEEKS
    );
    assert_eq!(progress_tracking(0).row_count(), 1);

    let options = TableOptions::default().with_weeks(usize::MAX);
    assert_eq!(options.weeks, MAX_PROGRESS_WEEKS);

    let unclamped = TableOptions {
        weeks: usize::MAX,
        ..TableOptions::default()
    };
    for layout in ALL_LAYOUTS {
        assert_sheet_rectangular(
            &reference_sheet(layout, &unclamped),
            &format!("{layout} weeks=usize::MAX"),
        );
    }
    let strength = reference_sheet(ReferenceLayout::Strength, &unclamped);
    assert!(strength
        .tables
        .iter()
        .any(|t| t.title == format!("{MAX_PROGRESS_WEEKS}-Week Progress Tracking")));
}

#[test]
fn test_keyword_routing_priority() {
    assert_eq!(
        ReferenceLayout::route("2. Safe Recovery Training Schedule"),
        ReferenceLayout::Strength
    );
    assert_eq!(
        ReferenceLayout::route("Week-Long Nutrition Guide"),
        ReferenceLayout::Nutrition
    );
    assert_eq!(
        ReferenceLayout::route("Mobility Drills"),
        ReferenceLayout::Recovery
    );
    assert_eq!(
        ReferenceLayout::route("Speed Ladder Session"),
        ReferenceLayout::Endurance
    );
    assert_eq!(
        ReferenceLayout::route("nutrition"),
        ReferenceLayout::General
    );
}

#[test]
fn test_default_profile_keeps_baked_tables() {
    let options = TableOptions::from_profile(&ProfileRecord::default());
    assert_eq!(options.intensity_shift, 0);
    assert!((options.weekly_hours - 10.0).abs() < f64::EPSILON);

    let sheet = reference_sheet(ReferenceLayout::Strength, &options);
    assert_eq!(
        sheet.tables[0].table.column("Intensity").unwrap().values,
        [8, 6, 9, 5, 7, 4, 2].map(Cell::Int).to_vec()
    );
    let distribution = sheet
        .tables
        .iter()
        .find(|t| t.title == "Training Distribution")
        .unwrap();
    assert_eq!(
        distribution.table.column("Hours per Week").unwrap().values,
        training_distribution(10.0)
            .column("Hours per Week")
            .unwrap()
            .values
    );
}

#[test]
fn test_options_follow_profile() {
    let profile = ProfileRecord::builder()
        .training_intensity(TrainingIntensity::VeryHigh)
        .training_duration(SessionDuration::Minutes90)
        .build()
        .unwrap();
    let options = TableOptions::from_profile(&profile);
    assert_eq!(options.session_minutes, 90);
    assert_eq!(options.intensity_shift, 0);
    assert_eq!(
        options
            .with_intensity(profile.training_intensity())
            .intensity_shift,
        1
    );

    let sheet = reference_sheet(ReferenceLayout::Strength, &options);
    let split = sheet
        .tables
        .iter()
        .find(|t| t.title == "Session Phase Split")
        .unwrap();
    assert_eq!(
        split.table.column("Minutes").unwrap().values,
        vec![Cell::Float(18.0), Cell::Float(58.5), Cell::Float(13.5)]
    );
}

#[test]
fn test_quick_reference_has_two_tables() {
    let sheet = reference_sheet(ReferenceLayout::QuickReference, &TableOptions::default());
    let titles: Vec<&str> = sheet.tables.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Weekly Training Schedule", "Training Distribution"]
    );
}

#[test]
fn test_table_renders_as_grid() {
    let rendered = weekly_training_schedule(0).to_string();
    let mut lines = rendered.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Day"));
    assert!(header.contains(" | Focus"));
    assert!(lines.next().unwrap().contains("-+-"));
    assert_eq!(rendered.lines().count(), 9);
}
