// ABOUTME: Integration tests for prompt rendering across the feature catalog
// ABOUTME: Validates profile values, blank-field placeholders, notes, and custom questions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use coachbot::coaching::{build_prompt, Feature, PromptBuilder};
use coachbot::constants::profile_defaults;
use coachbot::models::{
    CalorieGoal, DietType, FitnessLevel, Gender, ProfileRecord, SessionDuration,
    TrainingFrequency, TrainingIntensity,
};

fn full_profile() -> ProfileRecord {
    ProfileRecord::builder()
        .name("Priya")
        .age(17)
        .gender(Gender::Female)
        .sport("Cricket")
        .position("Fast Bowler")
        .fitness_level(FitnessLevel::Advanced)
        .injury_history("Left hamstring strain")
        .diet_type(DietType::Vegetarian)
        .allergies("Peanuts")
        .calorie_goal(CalorieGoal::Surplus)
        .training_intensity(TrainingIntensity::High)
        .training_duration(SessionDuration::Minutes90)
        .training_frequency(TrainingFrequency::SixPerWeek)
        .specific_goal("Bowl at 130 km/h")
        .build()
        .unwrap()
}

// =============================================================================
// End-to-end scenario: striker workout
// =============================================================================

#[test]
fn test_striker_full_body_prompt() {
    let profile = ProfileRecord::builder()
        .sport("Football")
        .position("Striker")
        .age(15)
        .injury_history("None")
        .build()
        .unwrap();

    let prompt = build_prompt(Feature::FullBodyWorkout, &profile, None);

    assert!(prompt.contains("Striker"));
    assert!(prompt.contains("Football"));
    assert!(prompt.contains("15"));
    assert!(prompt.starts_with(
        "As an experienced sports coach, create a comprehensive full-body workout plan for a Striker in Football."
    ));
}

// =============================================================================
// Profile coverage
// =============================================================================

#[test]
fn test_every_feature_contains_every_profile_value() {
    let profile = full_profile();
    let expected = [
        "Priya",
        "17",
        "Female",
        "Cricket",
        "Fast Bowler",
        "Advanced",
        "Left hamstring strain",
        "Vegetarian",
        "Peanuts",
        "Surplus",
        "High",
        "90 minutes",
        "6 times/week",
        "Bowl at 130 km/h",
    ];

    for feature in Feature::ALL {
        let extra = feature
            .is_custom()
            .then_some("How should I taper before a final?");
        let prompt = build_prompt(feature, &profile, extra);
        assert!(
            !prompt.trim().is_empty(),
            "{feature} rendered an empty prompt"
        );
        for value in expected {
            assert!(
                prompt.contains(value),
                "{feature} prompt is missing '{value}'"
            );
        }
    }
}

#[test]
fn test_blank_fields_use_placeholders() {
    let profile = ProfileRecord::builder()
        .name("   ")
        .injury_history("")
        .allergies(" ")
        .specific_goal("")
        .build()
        .unwrap();

    for feature in Feature::NUMBERED {
        let prompt = build_prompt(feature, &profile, None);
        assert!(prompt.contains(&format!("- Name: {}", profile_defaults::NAME)));
        assert!(prompt.contains(&format!(
            "- Injury History: {}",
            profile_defaults::INJURY_HISTORY
        )));
        assert!(prompt.contains(&format!("- Allergies: {}", profile_defaults::ALLERGIES)));
        assert!(prompt.contains(&format!(
            "- Specific Goal: {}",
            profile_defaults::SPECIFIC_GOAL
        )));
        assert!(prompt.contains(&format!("- Sport: {}", profile_defaults::SPORT)));
        assert!(prompt.contains(&format!("- Position: {}", profile_defaults::POSITION)));
    }
}

#[test]
fn test_no_slot_left_unrendered() {
    let profile = full_profile();
    for feature in Feature::ALL {
        let prompt = build_prompt(feature, &profile, Some("Any tips?"));
        for slot in [
            "{name}",
            "{sport}",
            "{position}",
            "{user_context}",
            "{injury_focus}",
            "{allergy_note}",
            "{question}",
            "{advice_intensity}",
        ] {
            assert!(
                !prompt.contains(slot),
                "{feature} left {slot} in the prompt"
            );
        }
    }
}

#[test]
fn test_recovery_focus_defaults() {
    let profile = ProfileRecord::builder().build().unwrap();

    let recovery = build_prompt(Feature::RecoverySchedule, &profile, None);
    assert!(recovery.contains("General recovery needs"));

    let mobility = build_prompt(Feature::MobilityRecovery, &profile, None);
    assert!(mobility.contains("general recovery"));

    let injured = ProfileRecord::builder()
        .injury_history("ACL reconstruction")
        .build()
        .unwrap();
    let recovery = build_prompt(Feature::RecoverySchedule, &injured, None);
    assert!(recovery.contains("ACL reconstruction"));
    assert!(!recovery.contains("General recovery needs"));
}

#[test]
fn test_nutrition_allergy_note() {
    let profile = ProfileRecord::builder().build().unwrap();
    let prompt = build_prompt(Feature::NutritionGuide, &profile, None);
    assert!(prompt.contains("allergies: none)"));

    let prompt = build_prompt(Feature::NutritionGuide, &full_profile(), None);
    assert!(prompt.contains("allergies: Peanuts)"));
}

// =============================================================================
// Notes and custom questions
// =============================================================================

#[test]
fn test_notes_are_appended_to_feature_prompts() {
    let profile = full_profile();
    let prompt = build_prompt(
        Feature::Hydration,
        &profile,
        Some("  Matches are in 35C heat  "),
    );
    assert!(prompt.ends_with("Additional notes from the athlete: Matches are in 35C heat"));

    let without = build_prompt(Feature::Hydration, &profile, Some("   "));
    assert!(!without.contains("Additional notes"));
}

#[test]
fn test_custom_question_prompt() {
    let profile = full_profile();
    let prompt = PromptBuilder::new()
        .with_advice_intensity(75)
        .build(
            Feature::CustomQuestion,
            &profile,
            Some("How do I bowl a yorker?"),
        );

    assert!(prompt.starts_with(
        "User Question: How do I bowl a yorker?. Advice Intensity: 75/100."
    ));
    assert!(prompt.contains("User Profile:"));
    assert!(!prompt.contains("Additional notes"));
}

#[test]
fn test_question_is_not_rescanned() {
    let profile = full_profile();
    let prompt = build_prompt(
        Feature::CustomQuestion,
        &profile,
        Some("Is {sport} harder than {position} work?"),
    );
    assert!(prompt.contains("Is {sport} harder than {position} work?"));
}

#[test]
fn test_profile_values_are_not_rescanned() {
    let profile = ProfileRecord::builder()
        .name("{sport}")
        .sport("Tennis")
        .build()
        .unwrap();
    let prompt = build_prompt(Feature::MentalFocus, &profile, None);
    assert!(prompt.contains("- Name: {sport}"));
}

#[test]
fn test_prompts_are_deterministic() {
    let profile = common::striker_profile();
    for feature in Feature::NUMBERED {
        assert_eq!(
            build_prompt(feature, &profile, None),
            build_prompt(feature, &profile, None)
        );
    }
}
