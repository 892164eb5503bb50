// ABOUTME: Renders a coaching feature template with the athlete profile
// ABOUTME: Single-pass {slot} substitution with explicit defaults for blank fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! # Prompt Builder
//!
//! Turns a [`Feature`] and a [`ProfileRecord`] into the natural-language prompt
//! sent to the generation model.
//!
//! Substitution is a single left-to-right pass over the template. Values are
//! inserted verbatim and never scanned again, so a question such as
//! `"what about {sport}?"` reaches the model unchanged. Placeholders without a
//! value are left in place.

use std::collections::HashMap;

use crate::constants::{generation, profile_defaults};
use crate::llm::prompts::USER_CONTEXT;
use crate::models::ProfileRecord;

use super::Feature;

/// Injury focus wording used when the athlete left injury history blank
const RECOVERY_INJURY_FOCUS: &str = "General recovery needs";
const MOBILITY_INJURY_FOCUS: &str = "general recovery";
const WARMUP_INJURY_FOCUS: &str = "none";
const ALLERGY_NOTE_DEFAULT: &str = "none";

/// Builds prompts for coaching features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptBuilder {
    advice_intensity: u8,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            advice_intensity: generation::DEFAULT_ADVICE_INTENSITY,
        }
    }
}

impl PromptBuilder {
    /// Builder with the default advice intensity
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advice intensity (1-100) quoted in custom question prompts
    #[must_use]
    pub fn with_advice_intensity(mut self, intensity: u8) -> Self {
        self.advice_intensity = intensity.clamp(1, generation::MAX_ADVICE_INTENSITY);
        self
    }

    /// Advice intensity quoted in custom question prompts
    #[must_use]
    pub const fn advice_intensity(&self) -> u8 {
        self.advice_intensity
    }

    /// Render the prompt for `feature`.
    ///
    /// For [`Feature::CustomQuestion`] `extra` is the athlete's question. For
    /// every other feature a non-blank `extra` is appended as additional notes.
    #[must_use]
    pub fn build(&self, feature: Feature, profile: &ProfileRecord, extra: Option<&str>) -> String {
        let mut slots = profile_slots(feature, profile);
        let user_context = render_template(USER_CONTEXT, &slots);
        slots.insert("user_context", user_context.trim_end().to_owned());

        if feature.is_custom() {
            slots.insert("question", extra.unwrap_or_default().to_owned());
            slots.insert("advice_intensity", self.advice_intensity.to_string());
        }

        let mut prompt = render_template(feature.template(), &slots)
            .trim_end()
            .to_owned();

        if !feature.is_custom() {
            if let Some(notes) = extra.map(str::trim).filter(|n| !n.is_empty()) {
                prompt.push_str("\n\nAdditional notes from the athlete: ");
                prompt.push_str(notes);
            }
        }

        prompt
    }
}

/// Render `feature` with default builder settings
#[must_use]
pub fn build_prompt(feature: Feature, profile: &ProfileRecord, extra: Option<&str>) -> String {
    PromptBuilder::default().build(feature, profile, extra)
}

fn profile_slots(feature: Feature, profile: &ProfileRecord) -> HashMap<&'static str, String> {
    let injury_history = profile.injury_history();
    let injury_focus = injury_history.map_or_else(
        || {
            match feature {
                Feature::RecoverySchedule => RECOVERY_INJURY_FOCUS,
                Feature::MobilityRecovery => MOBILITY_INJURY_FOCUS,
                Feature::WarmupCooldown => WARMUP_INJURY_FOCUS,
                _ => profile_defaults::INJURY_HISTORY,
            }
            .to_owned()
        },
        ToOwned::to_owned,
    );

    HashMap::from([
        (
            "name",
            profile.name().unwrap_or(profile_defaults::NAME).to_owned(),
        ),
        ("age", profile.age().to_string()),
        ("gender", profile.gender().to_string()),
        ("sport", profile.sport().to_owned()),
        ("position", profile.position().to_owned()),
        ("fitness_level", profile.fitness_level().to_string()),
        (
            "injury_history",
            injury_history
                .unwrap_or(profile_defaults::INJURY_HISTORY)
                .to_owned(),
        ),
        ("injury_focus", injury_focus),
        ("diet_type", profile.diet_type().to_string()),
        (
            "allergies",
            profile
                .allergies()
                .unwrap_or(profile_defaults::ALLERGIES)
                .to_owned(),
        ),
        (
            "allergy_note",
            profile
                .allergies()
                .unwrap_or(ALLERGY_NOTE_DEFAULT)
                .to_owned(),
        ),
        ("calorie_goal", profile.calorie_goal().to_string()),
        (
            "training_intensity",
            profile.training_intensity().to_string(),
        ),
        ("training_duration", profile.training_duration().to_string()),
        (
            "training_frequency",
            profile.training_frequency().to_string(),
        ),
        (
            "specific_goal",
            profile
                .specific_goal()
                .unwrap_or(profile_defaults::SPECIFIC_GOAL)
                .to_owned(),
        ),
    ])
}

fn is_slot_name(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Replace `{slot}` placeholders in one pass.
///
/// Inserted values are copied to the output without being scanned, and
/// placeholders missing from `slots` are kept as written.
#[must_use]
pub fn render_template<S: std::hash::BuildHasher>(
    template: &str,
    slots: &HashMap<&str, String, S>,
) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let replacement = after_open.find('}').and_then(|close| {
            let key = &after_open[..close];
            if is_slot_name(key) {
                slots.get(key).map(|value| (value, close))
            } else {
                None
            }
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}
