// ABOUTME: Coaching features: catalog, prompt builder, and submission handler
// ABOUTME: Entry point for turning an athlete profile into a generated plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! Coaching features and the submission flow.

/// Feature catalog
pub mod catalog;
/// Submission handler
pub mod handler;
/// Prompt rendering
pub mod prompt_builder;

pub use catalog::{Feature, FeatureDescriptor};
pub use handler::{
    Availability, CoachBot, FeatureGroup, KeyStatus, LandingInfo, PlanReport, PlanRequest,
    Submission,
};
pub use prompt_builder::{build_prompt, render_template, PromptBuilder};
