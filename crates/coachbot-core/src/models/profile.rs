// ABOUTME: Athlete profile record collected by the profile form
// ABOUTME: Immutable record with typed training preferences and blank-field placeholders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! # Athlete Profile
//!
//! [`ProfileRecord`] is the flat key-value record produced by one submission of
//! the profile form. It is recreated on every submission and never persisted.
//! Free-text fields are optional: accessors return `None` for missing or
//! whitespace-only values so callers can substitute the placeholder labels in
//! [`crate::constants::profile_defaults`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::profile_defaults;
use crate::errors::{AppError, AppResult};

/// Implements `ALL`, `label()`, `Display` and a case-insensitive `FromStr`
/// for a form option enum.
macro_rules! form_options {
    ($name:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Every option in form order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Label shown on the form and interpolated into prompts
            #[must_use]
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| {
                        option.label().eq_ignore_ascii_case(wanted)
                            || format!("{option:?}").eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| {
                        AppError::invalid_input(format!("Unknown {} '{wanted}'", $kind))
                    })
            }
        }
    };
}

/// Gender options on the profile form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
    /// Other
    Other,
    /// Prefer not to say
    PreferNotToSay,
}

form_options!(Gender, "gender", {
    Male => "Male",
    Female => "Female",
    Other => "Other",
    PreferNotToSay => "Prefer not to say",
});

/// Self-assessed fitness level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    /// New to structured training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Competitive level
    Advanced,
    /// Top competitive level
    Elite,
}

form_options!(FitnessLevel, "fitness level", {
    Beginner => "Beginner",
    Intermediate => "Intermediate",
    Advanced => "Advanced",
    Elite => "Elite",
});

/// Diet type preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    /// Vegetarian
    #[default]
    Vegetarian,
    /// Non-vegetarian
    NonVegetarian,
    /// Vegan
    Vegan,
    /// Pescatarian
    Pescatarian,
}

form_options!(DietType, "diet type", {
    Vegetarian => "Vegetarian",
    NonVegetarian => "Non-Vegetarian",
    Vegan => "Vegan",
    Pescatarian => "Pescatarian",
});

/// Daily calorie goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieGoal {
    /// Keep body weight stable
    #[default]
    Maintenance,
    /// Caloric deficit
    Deficit,
    /// Caloric surplus
    Surplus,
}

form_options!(CalorieGoal, "calorie goal", {
    Maintenance => "Maintenance",
    Deficit => "Deficit (Weight Loss)",
    Surplus => "Surplus (Muscle Gain)",
});

/// Overall training intensity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingIntensity {
    /// Low
    #[default]
    Low,
    /// Moderate
    Moderate,
    /// High
    High,
    /// Very high
    VeryHigh,
}

form_options!(TrainingIntensity, "training intensity", {
    Low => "Low",
    Moderate => "Moderate",
    High => "High",
    VeryHigh => "Very High",
});

impl TrainingIntensity {
    /// Offset applied to the baked weekly schedule intensities (1-10 scale).
    ///
    /// The baked schedule corresponds to `High`.
    #[must_use]
    pub const fn schedule_shift(&self) -> i64 {
        match self {
            Self::Low => -2,
            Self::Moderate => -1,
            Self::High => 0,
            Self::VeryHigh => 1,
        }
    }
}

/// Length of one training session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionDuration {
    /// 30 minutes
    #[default]
    Minutes30,
    /// 45 minutes
    Minutes45,
    /// 60 minutes
    Minutes60,
    /// 90 minutes
    Minutes90,
    /// 120 minutes
    Minutes120,
}

form_options!(SessionDuration, "training duration", {
    Minutes30 => "30 minutes",
    Minutes45 => "45 minutes",
    Minutes60 => "60 minutes",
    Minutes90 => "90 minutes",
    Minutes120 => "120 minutes",
});

impl SessionDuration {
    /// Session length in minutes
    #[must_use]
    pub const fn minutes(&self) -> u32 {
        match self {
            Self::Minutes30 => 30,
            Self::Minutes45 => 45,
            Self::Minutes60 => 60,
            Self::Minutes90 => 90,
            Self::Minutes120 => 120,
        }
    }

    /// Look up a duration by its minute count
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.minutes() == minutes)
    }
}

/// How often the athlete trains
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFrequency {
    /// Two to three sessions per week
    #[default]
    TwoToThree,
    /// Four to five sessions per week
    FourToFive,
    /// Six sessions per week
    SixPerWeek,
    /// Every day
    Daily,
}

form_options!(TrainingFrequency, "training frequency", {
    TwoToThree => "2-3 times/week",
    FourToFive => "4-5 times/week",
    SixPerWeek => "6 times/week",
    Daily => "Daily",
});

/// Athlete profile for one form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    name: Option<String>,
    age: u32,
    gender: Gender,
    sport: String,
    position: String,
    fitness_level: FitnessLevel,
    injury_history: Option<String>,
    diet_type: DietType,
    allergies: Option<String>,
    calorie_goal: CalorieGoal,
    training_intensity: TrainingIntensity,
    training_duration: SessionDuration,
    training_frequency: TrainingFrequency,
    specific_goal: Option<String>,
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            name: None,
            age: profile_defaults::AGE,
            gender: Gender::default(),
            sport: String::new(),
            position: String::new(),
            fitness_level: FitnessLevel::default(),
            injury_history: None,
            diet_type: DietType::default(),
            allergies: None,
            calorie_goal: CalorieGoal::default(),
            training_intensity: TrainingIntensity::default(),
            training_duration: SessionDuration::default(),
            training_frequency: TrainingFrequency::default(),
            specific_goal: None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl ProfileRecord {
    /// Start building a profile
    #[must_use]
    pub fn builder() -> ProfileRecordBuilder {
        ProfileRecordBuilder::default()
    }

    /// Reopen the profile for changes, e.g. CLI flags over a profile file
    #[must_use]
    pub fn into_builder(self) -> ProfileRecordBuilder {
        ProfileRecordBuilder { record: self }
    }

    /// Check the form bounds (used after deserializing a profile file)
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the age is outside the form bounds.
    pub fn validate(&self) -> AppResult<()> {
        if !(profile_defaults::MIN_AGE..=profile_defaults::MAX_AGE).contains(&self.age) {
            return Err(AppError::out_of_range(format!(
                "Age must be between {} and {}, got {}",
                profile_defaults::MIN_AGE,
                profile_defaults::MAX_AGE,
                self.age
            )));
        }
        Ok(())
    }

    /// Athlete name, `None` if left blank
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// Athlete age in years
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Gender
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Sport label, falls back to "Other" when blank
    #[must_use]
    pub fn sport(&self) -> &str {
        non_blank(Some(&self.sport)).unwrap_or(profile_defaults::SPORT)
    }

    /// Position label, falls back to "General Athlete" when blank
    #[must_use]
    pub fn position(&self) -> &str {
        non_blank(Some(&self.position)).unwrap_or(profile_defaults::POSITION)
    }

    /// Fitness level
    #[must_use]
    pub const fn fitness_level(&self) -> FitnessLevel {
        self.fitness_level
    }

    /// Injury history / risk zones, `None` if left blank
    #[must_use]
    pub fn injury_history(&self) -> Option<&str> {
        non_blank(self.injury_history.as_deref())
    }

    /// Diet type
    #[must_use]
    pub const fn diet_type(&self) -> DietType {
        self.diet_type
    }

    /// Allergies / food restrictions, `None` if left blank
    #[must_use]
    pub fn allergies(&self) -> Option<&str> {
        non_blank(self.allergies.as_deref())
    }

    /// Calorie goal
    #[must_use]
    pub const fn calorie_goal(&self) -> CalorieGoal {
        self.calorie_goal
    }

    /// Training intensity
    #[must_use]
    pub const fn training_intensity(&self) -> TrainingIntensity {
        self.training_intensity
    }

    /// Session duration
    #[must_use]
    pub const fn training_duration(&self) -> SessionDuration {
        self.training_duration
    }

    /// Training frequency
    #[must_use]
    pub const fn training_frequency(&self) -> TrainingFrequency {
        self.training_frequency
    }

    /// Specific goal, `None` if left blank
    #[must_use]
    pub fn specific_goal(&self) -> Option<&str> {
        non_blank(self.specific_goal.as_deref())
    }
}

/// Builder for [`ProfileRecord`]
#[derive(Debug, Clone, Default)]
pub struct ProfileRecordBuilder {
    record: ProfileRecord,
}

fn optional_text(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl ProfileRecordBuilder {
    /// Athlete name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.record.name = optional_text(name);
        self
    }

    /// Age in years
    #[must_use]
    pub const fn age(mut self, age: u32) -> Self {
        self.record.age = age;
        self
    }

    /// Gender
    #[must_use]
    pub const fn gender(mut self, gender: Gender) -> Self {
        self.record.gender = gender;
        self
    }

    /// Sport label (free text, usually a [`crate::models::Sport`] label)
    #[must_use]
    pub fn sport(mut self, sport: impl Into<String>) -> Self {
        self.record.sport = sport.into();
        self
    }

    /// Playing position
    #[must_use]
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.record.position = position.into();
        self
    }

    /// Fitness level
    #[must_use]
    pub const fn fitness_level(mut self, level: FitnessLevel) -> Self {
        self.record.fitness_level = level;
        self
    }

    /// Injury history / risk zones
    #[must_use]
    pub fn injury_history(mut self, injury: impl Into<String>) -> Self {
        self.record.injury_history = optional_text(injury);
        self
    }

    /// Diet type
    #[must_use]
    pub const fn diet_type(mut self, diet: DietType) -> Self {
        self.record.diet_type = diet;
        self
    }

    /// Allergies / food restrictions
    #[must_use]
    pub fn allergies(mut self, allergies: impl Into<String>) -> Self {
        self.record.allergies = optional_text(allergies);
        self
    }

    /// Calorie goal
    #[must_use]
    pub const fn calorie_goal(mut self, goal: CalorieGoal) -> Self {
        self.record.calorie_goal = goal;
        self
    }

    /// Training intensity
    #[must_use]
    pub const fn training_intensity(mut self, intensity: TrainingIntensity) -> Self {
        self.record.training_intensity = intensity;
        self
    }

    /// Session duration
    #[must_use]
    pub const fn training_duration(mut self, duration: SessionDuration) -> Self {
        self.record.training_duration = duration;
        self
    }

    /// Training frequency
    #[must_use]
    pub const fn training_frequency(mut self, frequency: TrainingFrequency) -> Self {
        self.record.training_frequency = frequency;
        self
    }

    /// Specific goal
    #[must_use]
    pub fn specific_goal(mut self, goal: impl Into<String>) -> Self {
        self.record.specific_goal = optional_text(goal);
        self
    }

    /// Finish the profile
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if the age is outside the form bounds.
    pub fn build(self) -> AppResult<ProfileRecord> {
        self.record.validate()?;
        Ok(self.record)
    }
}
