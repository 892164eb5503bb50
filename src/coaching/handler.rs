// ABOUTME: Submission handler tying prompt building, generation, sanitizing and tables together
// ABOUTME: Falls back to landing information when no API key is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! # Submission Handler
//!
//! [`CoachBot::submit`] runs one submission end to end:
//!
//! 1. render the prompt for the requested feature
//! 2. perform one generation call (soft-fail, see [`crate::generation`])
//! 3. sanitize the text
//! 4. record the call in the caller's [`CoachingSession`]
//! 5. attach the reference tables for the feature
//!
//! Without an API key the bot is [`Availability::Disabled`]: no provider is
//! built, no call is made, and every submission returns the landing page.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::CoachConfig;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::generation::{
    FailureKind, GenerationClient, GenerationError, GenerationOutcome, GenerationSettings,
};
use crate::llm::{GeminiProvider, LlmProvider};
use crate::models::ProfileRecord;
use crate::sanitizer::sanitize;
use crate::session::{CoachingSession, HistoryEntry};
use crate::tables::{reference_sheet, ReferenceSheet, TableOptions};

use super::{Feature, PromptBuilder};

/// Whether generation can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// A provider is configured
    Enabled,
    /// No API key: submissions show the landing page
    Disabled,
}

/// One submission from the athlete
#[derive(Debug, Clone)]
pub struct PlanRequest<'a> {
    feature: Feature,
    profile: &'a ProfileRecord,
    extra: Option<String>,
    advice_intensity: Option<u8>,
    temperature: Option<f32>,
    include_tables: bool,
    weeks: Option<usize>,
}

impl<'a> PlanRequest<'a> {
    /// Request a plan for `feature`
    #[must_use]
    pub const fn new(feature: Feature, profile: &'a ProfileRecord) -> Self {
        Self {
            feature,
            profile,
            extra: None,
            advice_intensity: None,
            temperature: None,
            include_tables: true,
            weeks: None,
        }
    }

    /// Ask a free-text coach question
    #[must_use]
    pub fn custom_question(question: impl Into<String>, profile: &'a ProfileRecord) -> Self {
        let mut request = Self::new(Feature::CustomQuestion, profile);
        request.extra = Some(question.into());
        request
    }

    /// Extra notes appended to a feature prompt
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.extra = Some(notes.into());
        self
    }

    /// Advice intensity (1-100) for custom questions; also sets the temperature
    #[must_use]
    pub const fn with_advice_intensity(mut self, intensity: u8) -> Self {
        self.advice_intensity = Some(intensity);
        self
    }

    /// Temperature override for feature plans
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Skip the reference tables
    #[must_use]
    pub const fn without_tables(mut self) -> Self {
        self.include_tables = false;
        self
    }

    /// Length of the progress tracking table
    #[must_use]
    pub const fn with_weeks(mut self, weeks: usize) -> Self {
        self.weeks = Some(weeks);
        self
    }

    /// Requested feature
    #[must_use]
    pub const fn feature(&self) -> Feature {
        self.feature
    }
}

/// Result of a submission
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    /// Generation is disabled; show getting-started information
    Landing(LandingInfo),
    /// A generation call was made
    Plan(Box<PlanReport>),
}

/// Everything shown for one generated plan
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    /// Requested feature
    pub feature: Feature,
    /// Prompt sent to the model
    pub prompt: String,
    /// Typed generation outcome (generated text is already sanitized)
    pub outcome: GenerationOutcome,
    /// Text to display: plan, placeholder, or model error
    pub text: String,
    /// Hint shown under a failure
    pub hint: Option<&'static str>,
    /// Reference tables, unless disabled
    pub tables: Option<ReferenceSheet>,
    /// Session history entry recorded for this call
    pub entry_id: Uuid,
}

/// A labelled list on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureGroup {
    /// Group heading
    pub title: &'static str,
    /// Items in the group
    pub items: &'static [&'static str],
}

/// Static getting-started content shown without an API key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LandingInfo {
    /// Prompt to configure a key
    pub notice: &'static str,
    /// Numbered setup steps
    pub getting_started: &'static [&'static str],
    /// Feature overview
    pub feature_groups: &'static [FeatureGroup],
    /// Closing note
    pub note: &'static str,
}

const GETTING_STARTED: &[&str] = &[
    "Get your API key: visit Google AI Studio (https://makersuite.google.com/app/apikey) for a free Gemini API key",
    "Provide the API key: set GEMINI_API_KEY or pass --api-key",
    "Fill your profile: complete your sport and fitness details",
    "Choose a feature: select what you want help with",
    "Generate your plan: run the command and get personalized coaching",
];

const FEATURE_GROUPS: &[FeatureGroup] = &[
    FeatureGroup {
        title: "Training Plans",
        items: &[
            "Full-body workouts",
            "Recovery schedules",
            "Strength programs",
            "Speed & agility training",
        ],
    },
    FeatureGroup {
        title: "Tactical Coaching",
        items: &[
            "Position-specific tips",
            "Decision-making drills",
            "Match preparation",
            "Mental focus techniques",
        ],
    },
    FeatureGroup {
        title: "Nutrition & Recovery",
        items: &[
            "Weekly meal plans",
            "Hydration strategies",
            "Post-injury mobility",
            "Tournament prep",
        ],
    },
];

impl Default for LandingInfo {
    fn default() -> Self {
        Self {
            notice: "Please provide your Gemini API key to get started.",
            getting_started: GETTING_STARTED,
            feature_groups: FEATURE_GROUPS,
            note: "Every plan includes organized training tables and schedules automatically.",
        }
    }
}

impl fmt::Display for LandingInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.notice)?;
        writeln!(f)?;
        writeln!(f, "Getting Started")?;
        for (idx, step) in self.getting_started.iter().enumerate() {
            writeln!(f, "  {}. {step}", idx + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "Features")?;
        for group in self.feature_groups {
            writeln!(f, "  {}", group.title)?;
            for item in group.items {
                writeln!(f, "    - {item}")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.note)
    }
}

/// Result of verifying the configured API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStatus {
    /// No key configured
    Missing,
    /// The provider accepted the key
    Accepted,
    /// The check failed; `kind` is `InvalidCredential` when the key was rejected
    Failed(GenerationError),
}

/// The coaching assistant
#[derive(Debug, Clone)]
pub struct CoachBot {
    client: Option<GenerationClient>,
    settings: GenerationSettings,
}

impl CoachBot {
    /// Build from configuration. A missing key yields a disabled bot.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &CoachConfig) -> AppResult<Self> {
        let settings = config.generation_settings();
        let Some(api_key) = config.api_key() else {
            warn!("No Gemini API key configured, generation disabled");
            return Ok(Self::disabled(settings));
        };

        let provider = GeminiProvider::with_timeout(api_key, config.timeout)?
            .with_default_model(config.model.clone())
            .with_base_url(config.api_base_url.clone());
        Ok(Self::with_provider(Arc::new(provider), settings))
    }

    /// Bot backed by an arbitrary provider
    #[must_use]
    pub fn with_provider(provider: Arc<dyn LlmProvider>, settings: GenerationSettings) -> Self {
        Self {
            client: Some(GenerationClient::new(provider)),
            settings,
        }
    }

    /// Bot without a provider
    #[must_use]
    pub const fn disabled(settings: GenerationSettings) -> Self {
        Self {
            client: None,
            settings,
        }
    }

    /// Whether generation can run
    #[must_use]
    pub const fn availability(&self) -> Availability {
        if self.client.is_some() {
            Availability::Enabled
        } else {
            Availability::Disabled
        }
    }

    /// Default sampling settings for feature plans
    #[must_use]
    pub const fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    fn settings_for(&self, request: &PlanRequest<'_>) -> GenerationSettings {
        if request.feature.is_custom() {
            let intensity = request
                .advice_intensity
                .unwrap_or(crate::constants::generation::DEFAULT_ADVICE_INTENSITY);
            return GenerationSettings::from_intensity(intensity)
                .with_model(self.settings.model.clone())
                .with_max_output_tokens(self.settings.max_output_tokens);
        }
        match request.temperature {
            Some(temperature) => self.settings.clone().with_temperature(temperature),
            None => self.settings.clone(),
        }
    }

    /// Run one submission.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank custom question. Generation failures
    /// never surface here; they are part of the returned report.
    #[instrument(skip_all, fields(feature = ?request.feature))]
    pub async fn submit(
        &self,
        session: &mut CoachingSession,
        request: PlanRequest<'_>,
    ) -> AppResult<Submission> {
        let Some(client) = &self.client else {
            info!("Generation disabled, returning landing information");
            return Ok(Submission::Landing(LandingInfo::default()));
        };

        let feature = request.feature;
        let has_question = request
            .extra
            .as_deref()
            .is_some_and(|q| !q.trim().is_empty());
        if feature.is_custom() && !has_question {
            warn!("Rejected empty coach question");
            return Err(AppError::invalid_input(
                "Please type a question before submitting.",
            ));
        }

        let mut builder = PromptBuilder::new();
        if let Some(intensity) = request.advice_intensity {
            builder = builder.with_advice_intensity(intensity);
        }
        let prompt = builder.build(feature, request.profile, request.extra.as_deref());
        let settings = self.settings_for(&request);

        let outcome = client
            .generate(&prompt, &settings)
            .await
            .map_text(sanitize);

        let entry = HistoryEntry::new(feature, &outcome);
        let entry_id = entry.id;
        session.record(entry);

        let tables = request.include_tables.then(|| {
            let mut options = TableOptions::from_profile(request.profile);
            if let Some(weeks) = request.weeks {
                options = options.with_weeks(weeks);
            }
            reference_sheet(feature.reference_layout(), &options)
        });

        Ok(Submission::Plan(Box::new(PlanReport {
            feature,
            prompt,
            text: outcome.display_text(),
            hint: outcome.hint(),
            outcome,
            tables,
            entry_id,
        })))
    }

    /// Verify the configured API key with the provider
    pub async fn check_key(&self) -> KeyStatus {
        let Some(client) = &self.client else {
            return KeyStatus::Missing;
        };

        match client.provider().health_check().await {
            Ok(true) => KeyStatus::Accepted,
            Ok(false) => KeyStatus::Failed(GenerationError {
                kind: FailureKind::InvalidCredential,
                code: ErrorCode::ExternalAuthFailed,
                message: "The API key was rejected. Please re-enter a valid key.".to_owned(),
            }),
            Err(err) => KeyStatus::Failed(err.into()),
        }
    }
}
