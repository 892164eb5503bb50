// ABOUTME: Core data models for athlete profiles and the sport catalog
// ABOUTME: Re-exports profile record, training preference enums, and sports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

/// Athlete profile record and training preference enums
pub mod profile;
/// Supported sports and their playing positions
pub mod sport;

pub use profile::{
    CalorieGoal, DietType, FitnessLevel, Gender, ProfileRecord, ProfileRecordBuilder,
    SessionDuration, TrainingFrequency, TrainingIntensity,
};
pub use sport::Sport;
