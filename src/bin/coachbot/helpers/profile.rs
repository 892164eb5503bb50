// ABOUTME: Profile form flags for the coachbot CLI
// ABOUTME: Builds a ProfileRecord from a JSON profile file and/or individual flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use std::path::PathBuf;

use clap::Args;
use coachbot::errors::{AppError, AppResult};
use coachbot::models::{
    CalorieGoal, DietType, FitnessLevel, Gender, ProfileRecord, SessionDuration, Sport,
    TrainingFrequency, TrainingIntensity,
};
use tracing::{debug, warn};

/// Athlete profile flags (stand-in for the profile form)
#[derive(Debug, Clone, Default, Args)]
pub struct ProfileArgs {
    /// Load the profile from a JSON file; other flags override its values
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Athlete name
    #[arg(long)]
    pub name: Option<String>,

    /// Age in years (10-100)
    #[arg(long)]
    pub age: Option<u32>,

    /// Gender (Male, Female, Other, "Prefer not to say")
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Sport, e.g. "Football/Soccer" or "Cricket"
    #[arg(long)]
    pub sport: Option<String>,

    /// Playing position (defaults to the sport's first position)
    #[arg(long)]
    pub position: Option<String>,

    /// Fitness level (Beginner, Intermediate, Advanced, Elite)
    #[arg(long)]
    pub fitness_level: Option<FitnessLevel>,

    /// Injury history / risk zones
    #[arg(long)]
    pub injury: Option<String>,

    /// Diet type (Vegetarian, Non-Vegetarian, Vegan, Pescatarian)
    #[arg(long)]
    pub diet: Option<DietType>,

    /// Allergies / food restrictions
    #[arg(long)]
    pub allergies: Option<String>,

    /// Calorie goal (Maintenance, Deficit, Surplus)
    #[arg(long)]
    pub calorie_goal: Option<CalorieGoal>,

    /// Training intensity (Low, Moderate, High, "Very High")
    #[arg(long)]
    pub training_intensity: Option<TrainingIntensity>,

    /// Session length in minutes (30, 45, 60, 90, 120)
    #[arg(long, value_name = "MINUTES")]
    pub duration: Option<u32>,

    /// Training frequency ("2-3 times/week", "4-5 times/week", "6 times/week", Daily)
    #[arg(long)]
    pub frequency: Option<TrainingFrequency>,

    /// Specific goal
    #[arg(long)]
    pub goal: Option<String>,
}

impl ProfileArgs {
    /// Build the profile: file first, then flags on top
    pub async fn load(&self) -> AppResult<ProfileRecord> {
        let base = match &self.profile {
            Some(path) => {
                debug!(path = %path.display(), "Loading profile file");
                let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
                    AppError::invalid_input(format!(
                        "Cannot read profile file {}",
                        path.display()
                    ))
                    .with_source(e)
                })?;
                let record = serde_json::from_str::<ProfileRecord>(&raw).map_err(|e| {
                    AppError::serialization(format!("Invalid profile file: {e}"))
                })?;
                record.validate()?;
                record
            }
            None => ProfileRecord::default(),
        };

        let sport_label = self.sport.as_deref().map(|raw| {
            raw.parse::<Sport>()
                .map_or_else(|_| raw.trim().to_owned(), |sport| sport.label().to_owned())
        });
        let catalog_sport = sport_label
            .as_deref()
            .unwrap_or_else(|| base.sport())
            .parse::<Sport>()
            .ok();

        let mut builder = base.into_builder();

        if let Some(name) = &self.name {
            builder = builder.name(name.clone());
        }
        if let Some(age) = self.age {
            builder = builder.age(age);
        }
        if let Some(gender) = self.gender {
            builder = builder.gender(gender);
        }

        if let Some(label) = sport_label {
            builder = builder.sport(label);
        }

        match (&self.position, catalog_sport) {
            (Some(position), Some(sport)) => {
                if !sport.has_position(position) {
                    warn!(%sport, position = %position, "Position is not listed for this sport");
                }
                builder = builder.position(position.clone());
            }
            (Some(position), None) => builder = builder.position(position.clone()),
            (None, Some(sport)) if self.sport.is_some() => {
                builder = builder.position(sport.default_position());
            }
            (None, _) => {}
        }

        if let Some(level) = self.fitness_level {
            builder = builder.fitness_level(level);
        }
        if let Some(injury) = &self.injury {
            builder = builder.injury_history(injury.clone());
        }
        if let Some(diet) = self.diet {
            builder = builder.diet_type(diet);
        }
        if let Some(allergies) = &self.allergies {
            builder = builder.allergies(allergies.clone());
        }
        if let Some(goal) = self.calorie_goal {
            builder = builder.calorie_goal(goal);
        }
        if let Some(intensity) = self.training_intensity {
            builder = builder.training_intensity(intensity);
        }
        if let Some(minutes) = self.duration {
            let duration = SessionDuration::from_minutes(minutes).ok_or_else(|| {
                AppError::out_of_range(format!(
                    "Session duration must be 30, 45, 60, 90 or 120 minutes, got {minutes}"
                ))
            })?;
            builder = builder.training_duration(duration);
        }
        if let Some(frequency) = self.frequency {
            builder = builder.training_frequency(frequency);
        }
        if let Some(goal) = &self.goal {
            builder = builder.specific_goal(goal.clone());
        }

        builder.build()
    }
}
