// ABOUTME: Re-exports the unified error types from coachbot-core
// ABOUTME: Keeps `coachbot::errors` as the import path used by the library and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

pub use coachbot_core::errors::{AppError, AppResult, ErrorCode};
