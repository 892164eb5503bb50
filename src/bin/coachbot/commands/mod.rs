// ABOUTME: Re-exports command modules for the coachbot CLI
// ABOUTME: Provides plan, ask, tables, and key-check commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

pub mod ask;
pub mod check_key;
pub mod plan;
pub mod tables;
