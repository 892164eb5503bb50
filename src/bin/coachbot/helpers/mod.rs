// ABOUTME: Re-exports helper modules for the coachbot CLI
// ABOUTME: Provides profile flag parsing and display formatting utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

pub mod display;
pub mod profile;
