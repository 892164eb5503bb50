// ABOUTME: Coaching prompt templates loaded at compile time from markdown files
// ABOUTME: Each feature template carries named {slot} placeholders filled by the prompt builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! # Coaching Prompts
//!
//! Templates are plain markdown files next to this module, embedded with
//! `include_str!` so they ship inside the binary and can be edited without
//! touching Rust code.
//!
//! Placeholders use `{slot}` syntax. The shared [`USER_CONTEXT`] block is
//! rendered first and inserted wherever a template references `{user_context}`.

/// Shared athlete profile block embedded by every feature template
pub const USER_CONTEXT: &str = include_str!("user_context.md");

/// Full-body workout plan for the athlete's position and sport
pub const FULL_BODY_WORKOUT: &str = include_str!("full_body_workout.md");

/// Injury-aware recovery training schedule
pub const RECOVERY_SCHEDULE: &str = include_str!("recovery_schedule.md");

/// Position-specific tactical coaching tips
pub const TACTICAL_COACHING: &str = include_str!("tactical_coaching.md");

/// Week-long nutrition guide
pub const NUTRITION_GUIDE: &str = include_str!("nutrition_guide.md");

/// Warm-up and cooldown routine
pub const WARMUP_COOLDOWN: &str = include_str!("warmup_cooldown.md");

/// Tournament mental preparation program
pub const MENTAL_FOCUS: &str = include_str!("mental_focus.md");

/// Hydration and electrolyte strategy
pub const HYDRATION: &str = include_str!("hydration.md");

/// Pre-match visualization techniques
pub const VISUALIZATION: &str = include_str!("visualization.md");

/// Positional decision-making drills
pub const DECISION_MAKING: &str = include_str!("decision_making.md");

/// Post-injury mobility program
pub const MOBILITY_RECOVERY: &str = include_str!("mobility_recovery.md");

/// Free-text coach question answered as a compact markdown table
pub const CUSTOM_QUESTION: &str = include_str!("custom_question.md");
