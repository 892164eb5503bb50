// ABOUTME: Configuration module for the coaching client
// ABOUTME: Re-exports environment-driven settings and the deployment environment type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! Configuration is read from environment variables only. CLI flags override
//! individual values after loading.

/// Environment variable parsing and validation
pub mod environment;

pub use environment::{CoachConfig, Environment};
