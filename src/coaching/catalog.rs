// ABOUTME: Catalog of coaching features offered to the athlete
// ABOUTME: Each feature carries its display name, prompt template and reference table layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{AppError, AppResult};
use crate::llm::prompts;
use crate::tables::ReferenceLayout;

/// A coaching feature the athlete can request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Full-body workout plan for the athlete's position
    #[default]
    FullBodyWorkout,
    /// Injury-aware recovery training schedule
    RecoverySchedule,
    /// Tactical coaching tips for the sport
    TacticalCoaching,
    /// Week-long nutrition guide
    NutritionGuide,
    /// Warm-up and cooldown routine
    WarmupCooldown,
    /// Tournament mental focus routines
    MentalFocus,
    /// Hydration and electrolyte strategy
    Hydration,
    /// Pre-match visualization techniques
    Visualization,
    /// Positional decision-making drills
    DecisionMaking,
    /// Post-injury mobility workouts
    MobilityRecovery,
    /// Free-text question answered as a compact table
    CustomQuestion,
}

/// Static description of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureDescriptor {
    /// Name shown in the feature selector
    pub display_name: &'static str,
    /// Prompt template with `{slot}` placeholders
    #[serde(skip)]
    pub template: &'static str,
}

impl Feature {
    /// Numbered features in selector order
    pub const NUMBERED: [Self; 10] = [
        Self::FullBodyWorkout,
        Self::RecoverySchedule,
        Self::TacticalCoaching,
        Self::NutritionGuide,
        Self::WarmupCooldown,
        Self::MentalFocus,
        Self::Hydration,
        Self::Visualization,
        Self::DecisionMaking,
        Self::MobilityRecovery,
    ];

    /// Every feature, custom question last
    pub const ALL: [Self; 11] = [
        Self::FullBodyWorkout,
        Self::RecoverySchedule,
        Self::TacticalCoaching,
        Self::NutritionGuide,
        Self::WarmupCooldown,
        Self::MentalFocus,
        Self::Hydration,
        Self::Visualization,
        Self::DecisionMaking,
        Self::MobilityRecovery,
        Self::CustomQuestion,
    ];

    /// Selector label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::FullBodyWorkout => "1. Full-Body Workout Plan for [Position] in [Sport]",
            Self::RecoverySchedule => {
                "2. Safe Recovery Training Schedule for Athlete with [Injury]"
            }
            Self::TacticalCoaching => "3. Tactical Coaching Tips to Improve [Skill] in [Sport]",
            Self::NutritionGuide => "4. Week-Long Nutrition Guide for Young Athlete",
            Self::WarmupCooldown => "5. Personalized Warm-up & Cooldown Routine",
            Self::MentalFocus => "6. Mental Focus Routines for Tournaments",
            Self::Hydration => "7. Hydration & Electrolyte Strategy",
            Self::Visualization => "8. Pre-Match Visualization Techniques",
            Self::DecisionMaking => "9. Positional Decision-Making Drills",
            Self::MobilityRecovery => "10. Mobility Workouts for Post-Injury Recovery",
            Self::CustomQuestion => "Custom Coach Consultation",
        }
    }

    /// Selector number, `None` for the custom question
    #[must_use]
    pub fn number(&self) -> Option<usize> {
        Self::NUMBERED
            .iter()
            .position(|f| f == self)
            .map(|idx| idx + 1)
    }

    /// Prompt template for this feature
    #[must_use]
    pub const fn template(&self) -> &'static str {
        match self {
            Self::FullBodyWorkout => prompts::FULL_BODY_WORKOUT,
            Self::RecoverySchedule => prompts::RECOVERY_SCHEDULE,
            Self::TacticalCoaching => prompts::TACTICAL_COACHING,
            Self::NutritionGuide => prompts::NUTRITION_GUIDE,
            Self::WarmupCooldown => prompts::WARMUP_COOLDOWN,
            Self::MentalFocus => prompts::MENTAL_FOCUS,
            Self::Hydration => prompts::HYDRATION,
            Self::Visualization => prompts::VISUALIZATION,
            Self::DecisionMaking => prompts::DECISION_MAKING,
            Self::MobilityRecovery => prompts::MOBILITY_RECOVERY,
            Self::CustomQuestion => prompts::CUSTOM_QUESTION,
        }
    }

    /// Reference tables shown with this feature's plan.
    ///
    /// Agrees with [`ReferenceLayout::route`] applied to the display name.
    #[must_use]
    pub const fn reference_layout(&self) -> ReferenceLayout {
        match self {
            Self::FullBodyWorkout | Self::RecoverySchedule | Self::MobilityRecovery => {
                ReferenceLayout::Strength
            }
            Self::NutritionGuide => ReferenceLayout::Nutrition,
            Self::TacticalCoaching
            | Self::WarmupCooldown
            | Self::MentalFocus
            | Self::Hydration
            | Self::Visualization
            | Self::DecisionMaking => ReferenceLayout::General,
            Self::CustomQuestion => ReferenceLayout::QuickReference,
        }
    }

    /// Whether the feature is driven by a free-text question
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::CustomQuestion)
    }

    /// Static descriptor
    #[must_use]
    pub const fn descriptor(&self) -> FeatureDescriptor {
        FeatureDescriptor {
            display_name: self.display_name(),
            template: self.template(),
        }
    }

    /// Map a selector label to a feature, falling back to the default
    /// feature for labels outside the catalog.
    #[must_use]
    pub fn from_display_name(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.display_name() == name)
            .unwrap_or_else(|| {
                warn!(feature = name, "Unknown feature name, using default feature");
                Self::default()
            })
    }

    /// Strict lookup by number, exact label, or label without its number
    /// prefix (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `UnknownFeature` when nothing matches.
    pub fn lookup(query: &str) -> AppResult<Self> {
        let wanted = query.trim();
        if let Ok(number) = wanted.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| Self::NUMBERED.get(idx).copied())
                .ok_or_else(|| AppError::unknown_feature(wanted));
        }

        Self::ALL
            .iter()
            .copied()
            .find(|f| {
                f.display_name() == wanted
                    || strip_number(f.display_name()).eq_ignore_ascii_case(wanted)
                    || format!("{f:?}").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| AppError::unknown_feature(wanted))
    }
}

fn strip_number(label: &str) -> &str {
    label
        .split_once(". ")
        .filter(|(prefix, _)| prefix.chars().all(|c| c.is_ascii_digit()))
        .map_or(label, |(_, rest)| rest)
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Feature {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}
