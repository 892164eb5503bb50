// ABOUTME: Per-session, in-memory log of completed generation calls
// ABOUTME: Append-only history owned by the caller and passed into each submission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use chrono::{DateTime, Local};
use serde::Serialize;
use uuid::Uuid;

use crate::coaching::Feature;
use crate::constants::session::{HISTORY_DISPLAY_LIMIT, PREVIEW_CHARS};
use crate::generation::{GenerationOutcome, OutcomeStatus};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One completed generation call
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// Entry identifier
    pub id: Uuid,
    /// When the call completed
    pub timestamp: DateTime<Local>,
    /// Requested feature
    pub feature: Feature,
    /// Text shown to the athlete (plan, placeholder, or model error)
    pub response: String,
    /// Outcome of the call
    pub status: OutcomeStatus,
}

impl HistoryEntry {
    /// Entry for `outcome`, stamped now
    #[must_use]
    pub fn new(feature: Feature, outcome: &GenerationOutcome) -> Self {
        Self::at(feature, outcome, Local::now())
    }

    /// Entry for `outcome` with an explicit timestamp
    #[must_use]
    pub fn at(feature: Feature, outcome: &GenerationOutcome, timestamp: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            feature,
            response: outcome.display_text(),
            status: outcome.status(),
        }
    }

    /// `YYYY-MM-DD HH:MM:SS`
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// First characters of the response followed by "..."
    #[must_use]
    pub fn preview(&self) -> String {
        let head: String = self.response.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}

/// Session history for one athlete interaction sequence
#[derive(Debug, Clone, Serialize)]
pub struct CoachingSession {
    id: Uuid,
    history: Vec<HistoryEntry>,
}

impl Default for CoachingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CoachingSession {
    /// Empty session
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: Vec::new(),
        }
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Append an entry
    pub fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// All entries, oldest first
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of recorded calls
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Up to `limit` most recent entries, newest first
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev().take(limit)
    }

    /// The "previous plans" list: last five entries, newest first
    pub fn previous_plans(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.recent(HISTORY_DISPLAY_LIMIT)
    }
}
