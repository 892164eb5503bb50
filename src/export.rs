// ABOUTME: Plain-text export of a generated plan
// ABOUTME: Writes coachbot_plan_YYYYMMDD_HHMMSS.txt into the export directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use tokio::fs;
use tracing::info;

use crate::constants::export::{PLAN_FILE_EXTENSION, PLAN_FILE_PREFIX, PLAN_FILE_TIMESTAMP};
use crate::errors::{AppError, AppResult};

/// File name for a plan exported at `now`
#[must_use]
pub fn plan_file_name<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{PLAN_FILE_PREFIX}{}.{PLAN_FILE_EXTENSION}",
        now.format(PLAN_FILE_TIMESTAMP)
    )
}

/// Write `text` to a timestamped file in `dir` and return its path.
///
/// The directory is created if missing.
///
/// # Errors
///
/// Returns `StorageError` if the directory or file cannot be written.
pub async fn export_plan(dir: &Path, text: &str, now: &DateTime<Local>) -> AppResult<PathBuf> {
    let path = dir.join(plan_file_name(now));

    fs::create_dir_all(dir).await.map_err(|e| {
        AppError::storage(format!("Cannot create export directory {}", dir.display()))
            .with_source(e)
    })?;

    fs::write(&path, text).await.map_err(|e| {
        AppError::storage(format!("Cannot write plan to {}", path.display())).with_source(e)
    })?;

    info!(path = %path.display(), bytes = text.len(), "Exported plan");
    Ok(path)
}
