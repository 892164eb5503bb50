// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Generation defaults, profile placeholder labels, and session/export limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Defaults for requests sent to the hosted generation model
pub mod generation {
    /// Default Gemini model identifier
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    /// Default creativity level (the "AI Creativity Level" slider default)
    pub const DEFAULT_TEMPERATURE: f32 = 0.5;
    /// Nucleus sampling cut-off used for profile-based plans
    pub const DEFAULT_TOP_P: f32 = 0.95;
    /// Top-k sampling cut-off used for profile-based plans
    pub const DEFAULT_TOP_K: u32 = 40;
    /// Output length cap for every request
    pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;
    /// Request timeout applied to the HTTP client
    pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
    /// Default "Advice Intensity" slider value for custom questions
    pub const DEFAULT_ADVICE_INTENSITY: u8 = 40;
    /// Upper bound of the advice intensity slider
    pub const MAX_ADVICE_INTENSITY: u8 = 100;
    /// Placeholder shown when the model returns no usable content
    pub const UNAVAILABLE_MESSAGE: &str =
        "The AI Coach is currently unavailable. Please check your connection.";
    /// Prefix of the display text for failed generation calls
    pub const MODEL_ERROR_PREFIX: &str = "Model Error: ";
}

/// Placeholder labels substituted for blank profile fields
pub mod profile_defaults {
    /// Used when the athlete leaves their name blank
    pub const NAME: &str = "Athlete";
    /// Used when no injury history is given
    pub const INJURY_HISTORY: &str = "None";
    /// Used when no allergies are given
    pub const ALLERGIES: &str = "None";
    /// Used when no specific goal is given
    pub const SPECIFIC_GOAL: &str = "General improvement";
    /// Used when the sport is left blank
    pub const SPORT: &str = "Other";
    /// Used when the position is left blank
    pub const POSITION: &str = "General Athlete";
    /// Default age on the profile form
    pub const AGE: u32 = 15;
    /// Youngest age accepted by the profile form
    pub const MIN_AGE: u32 = 10;
    /// Oldest age accepted by the profile form
    pub const MAX_AGE: u32 = 100;
}

/// Session history display limits
pub mod session {
    /// Number of past plans shown in the "previous plans" list
    pub const HISTORY_DISPLAY_LIMIT: usize = 5;
    /// Number of characters kept in a history preview
    pub const PREVIEW_CHARS: usize = 200;
}

/// Plain-text plan export
pub mod export {
    /// File name prefix for exported plans
    pub const PLAN_FILE_PREFIX: &str = "coachbot_plan_";
    /// Timestamp layout appended to the prefix
    pub const PLAN_FILE_TIMESTAMP: &str = "%Y%m%d_%H%M%S";
    /// Extension for exported plans
    pub const PLAN_FILE_EXTENSION: &str = "txt";
}
