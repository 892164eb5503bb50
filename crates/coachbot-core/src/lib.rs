// ABOUTME: Core types and constants for the CoachBot coaching assistant
// ABOUTME: Foundation crate with error handling, athlete profile models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

#![deny(unsafe_code)]

//! # CoachBot Core
//!
//! Foundation crate providing shared types and constants for CoachBot. It is
//! kept free of network and runtime dependencies so the profile model and the
//! error vocabulary can be reused by every front end.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Generation defaults, profile placeholders, session limits
//! - **models**: Athlete profile record and the sport/position catalog

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (athlete profile, sports, training preferences)
pub mod models;
