// ABOUTME: CoachBot CLI - personalized coaching plans from an athlete profile
// ABOUTME: Parses profile flags, runs coaching features, and prints plans with reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors
//!
//! Usage:
//! ```bash
//! # List the coaching features
//! coachbot features
//!
//! # Full-body workout for a 15 year old striker
//! coachbot plan --feature 1 --sport Football --position "Forward/Striker" --age 15
//!
//! # Several features in one session, exported to a text file
//! coachbot plan --feature 4 --feature 7 --profile athlete.json --export
//!
//! # Ask the coach a question
//! coachbot ask "How do I improve my first touch?" --intensity 70
//!
//! # Reference tables only (no API key needed)
//! coachbot tables --feature "Nutrition" --weeks 12
//!
//! # Verify the API key
//! coachbot check-key
//! ```

mod commands;
mod helpers;

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use coachbot::coaching::{CoachBot, Feature};
use coachbot::config::CoachConfig;
use coachbot::constants::generation::{DEFAULT_ADVICE_INTENSITY, MAX_ADVICE_INTENSITY};
use coachbot::logging::LoggingConfig;
use coachbot::tables::{MAX_PROGRESS_WEEKS, MIN_PROGRESS_WEEKS};
use tracing::{debug, info};

use commands::plan::PlanOptions;
use commands::tables::TableOverrides;
use helpers::profile::ProfileArgs;

const WEEKS_RANGE: std::ops::RangeInclusive<u64> =
    (MIN_PROGRESS_WEEKS as u64)..=(MAX_PROGRESS_WEEKS as u64);

#[derive(Parser)]
#[command(
    name = "coachbot",
    about = "AI sports coaching assistant",
    long_about = "Generates personalized training, nutrition, recovery and tactical plans for young athletes using Google Gemini."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Gemini API key override (otherwise read from GEMINI_API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List the coaching features
    Features,

    /// Generate coaching plans for one or more features
    Plan {
        /// Feature number or name (repeat for several plans)
        #[arg(long, short = 'f', required = true)]
        feature: Vec<Feature>,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Extra notes appended to each prompt
        #[arg(long)]
        notes: Option<String>,

        /// Sampling temperature (0.0-1.0)
        #[arg(long)]
        temperature: Option<f32>,

        /// Skip the reference tables
        #[arg(long)]
        no_tables: bool,

        /// Weeks in the progress tracking table (1-52)
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(WEEKS_RANGE))]
        weeks: Option<usize>,

        /// Write the generated plans to a text file
        #[arg(long)]
        export: bool,
    },

    /// Ask the coach a free-text question
    Ask {
        /// Your question
        question: String,

        /// Advice intensity: 1 is conservative, 100 is aggressive
        #[arg(
            long,
            default_value_t = DEFAULT_ADVICE_INTENSITY,
            value_parser = clap::value_parser!(u8).range(1..=i64::from(MAX_ADVICE_INTENSITY))
        )]
        intensity: u8,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Print the reference tables for a feature without calling the model
    Tables {
        /// Feature number or name
        #[arg(long, short = 'f', default_value = "1")]
        feature: Feature,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Weeks in the progress tracking table (1-52)
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(WEEKS_RANGE))]
        weeks: Option<usize>,

        /// Weekly training hours for the distribution table
        #[arg(long)]
        hours: Option<f64>,

        /// Session length in minutes for the phase split
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Verify the configured API key
    CheckKey,
}

fn build_coach(api_key: Option<String>) -> anyhow::Result<(CoachBot, CoachConfig)> {
    let mut config = CoachConfig::from_env().context("Failed to load configuration")?;
    if let Some(key) = api_key {
        debug!("Using API key from --api-key");
        config = config.with_api_key(key);
    }
    info!("{}", config.summary());
    let coach = CoachBot::from_config(&config).context("Failed to build Gemini client")?;
    Ok((coach, config))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env files are fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    logging.init()?;

    match cli.command {
        Command::Features => helpers::display::display_features(),
        Command::Plan {
            feature,
            profile,
            notes,
            temperature,
            no_tables,
            weeks,
            export,
        } => {
            let (coach, config) = build_coach(cli.api_key)?;
            let profile = profile.load().await?;
            let options = PlanOptions {
                notes,
                temperature,
                no_tables,
                weeks,
                export,
            };
            commands::plan::run(&coach, &profile, &feature, &options, &config.export_dir).await?;
        }
        Command::Ask {
            question,
            intensity,
            profile,
        } => {
            let (coach, _) = build_coach(cli.api_key)?;
            let profile = profile.load().await?;
            commands::ask::run(&coach, &profile, question, intensity).await?;
        }
        Command::Tables {
            feature,
            profile,
            weeks,
            hours,
            minutes,
        } => {
            let overrides = TableOverrides {
                intensity: profile.training_intensity,
                weeks,
                hours,
                minutes,
            };
            let profile = profile.load().await?;
            commands::tables::run(feature, &profile, &overrides);
        }
        Command::CheckKey => {
            let (coach, _) = build_coach(cli.api_key)?;
            commands::check_key::run(&coach).await?;
        }
    }

    Ok(())
}
