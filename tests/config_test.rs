// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Runs serially because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use coachbot::config::environment::{
    API_BASE_URL_ENV, EXPORT_DIR_ENV, MAX_OUTPUT_TOKENS_ENV, MODEL_ENV, TEMPERATURE_ENV,
    TIMEOUT_SECS_ENV,
};
use coachbot::config::CoachConfig;
use coachbot::errors::ErrorCode;
use coachbot::llm::{API_BASE_URL, GEMINI_API_KEY_ENV};
use serial_test::serial;

const ALL_VARS: [&str; 7] = [
    GEMINI_API_KEY_ENV,
    MODEL_ENV,
    API_BASE_URL_ENV,
    TIMEOUT_SECS_ENV,
    TEMPERATURE_ENV,
    MAX_OUTPUT_TOKENS_ENV,
    EXPORT_DIR_ENV,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();
    let config = CoachConfig::from_env().unwrap();

    assert!(!config.has_api_key());
    assert_eq!(config.model, "gemini-2.5-flash");
    assert_eq!(config.api_base_url, API_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert!((config.temperature - 0.5).abs() < f32::EPSILON);
    assert_eq!(config.max_output_tokens, 8192);
    assert_eq!(config.export_dir, PathBuf::from("."));
    assert!(config.summary().contains("key=missing"));
}

#[test]
#[serial]
fn test_values_from_environment() {
    clear_env();
    env::set_var(GEMINI_API_KEY_ENV, "  secret-key  ");
    env::set_var(MODEL_ENV, "gemini-2.0-flash");
    env::set_var(API_BASE_URL_ENV, "http://127.0.0.1:9999/v1beta");
    env::set_var(TIMEOUT_SECS_ENV, "15");
    env::set_var(TEMPERATURE_ENV, "0.8");
    env::set_var(MAX_OUTPUT_TOKENS_ENV, "1024");
    env::set_var(EXPORT_DIR_ENV, "/tmp/coachbot-plans");

    let config = CoachConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.api_key(), Some("secret-key"));
    assert_eq!(config.model, "gemini-2.0-flash");
    assert_eq!(config.api_base_url, "http://127.0.0.1:9999/v1beta");
    assert_eq!(config.timeout, Duration::from_secs(15));
    assert!((config.temperature - 0.8).abs() < f32::EPSILON);
    assert_eq!(config.max_output_tokens, 1024);
    assert_eq!(config.export_dir, PathBuf::from("/tmp/coachbot-plans"));

    let settings = config.generation_settings();
    assert_eq!(settings.model, "gemini-2.0-flash");
    assert_eq!(settings.max_output_tokens, 1024);
    assert!((settings.temperature() - 0.8).abs() < f32::EPSILON);
    assert!(!format!("{config:?}").contains("secret-key"));
}

#[test]
#[serial]
fn test_blank_key_is_treated_as_missing() {
    clear_env();
    env::set_var(GEMINI_API_KEY_ENV, "   ");
    let config = CoachConfig::from_env().unwrap();
    clear_env();
    assert!(!config.has_api_key());
}

#[test]
#[serial]
fn test_invalid_numbers_are_rejected() {
    for (var, value) in [
        (TIMEOUT_SECS_ENV, "soon"),
        (TEMPERATURE_ENV, "warm"),
        (MAX_OUTPUT_TOKENS_ENV, "-5"),
    ] {
        clear_env();
        env::set_var(var, value);
        let err = CoachConfig::from_env().unwrap_err();
        clear_env();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{var}={value}");
        assert!(err.message.contains(var));
    }
}

#[test]
#[serial]
fn test_out_of_range_values_are_rejected() {
    for (var, value) in [
        (TIMEOUT_SECS_ENV, "0"),
        (TEMPERATURE_ENV, "1.5"),
        (MAX_OUTPUT_TOKENS_ENV, "0"),
        (API_BASE_URL_ENV, "generativelanguage.googleapis.com"),
    ] {
        clear_env();
        env::set_var(var, value);
        let err = CoachConfig::from_env().unwrap_err();
        clear_env();
        assert_eq!(err.code, ErrorCode::ConfigInvalid, "{var}={value}");
    }
}

#[test]
#[serial]
fn test_cli_key_overrides_environment() {
    clear_env();
    env::set_var(GEMINI_API_KEY_ENV, "from-env");
    let config = CoachConfig::from_env().unwrap().with_api_key("from-flag");
    clear_env();
    assert_eq!(config.api_key(), Some("from-flag"));
    assert!(config.summary().contains("key=configured"));
}
