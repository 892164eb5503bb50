// ABOUTME: Sport enumeration for the athlete profile form
// ABOUTME: Lists supported sports with display labels and their playing positions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Sports offered on the profile form
///
/// The profile stores sport and position as free text so that an athlete can
/// still describe a sport outside this list; this enum drives the form
/// options and the position lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    /// Association football
    Football,
    /// Cricket
    Cricket,
    /// Basketball
    Basketball,
    /// Track and field events
    Athletics,
    /// Tennis
    Tennis,
    /// Swimming
    Swimming,
    /// Volleyball
    Volleyball,
    /// Badminton
    Badminton,
    /// Field hockey
    Hockey,
    /// Any other sport
    Other,
}

impl Sport {
    /// All sports in form order
    pub const ALL: [Self; 10] = [
        Self::Football,
        Self::Cricket,
        Self::Basketball,
        Self::Athletics,
        Self::Tennis,
        Self::Swimming,
        Self::Volleyball,
        Self::Badminton,
        Self::Hockey,
        Self::Other,
    ];

    /// Label shown on the form and interpolated into prompts
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Football => "Football/Soccer",
            Self::Cricket => "Cricket",
            Self::Basketball => "Basketball",
            Self::Athletics => "Athletics/Track & Field",
            Self::Tennis => "Tennis",
            Self::Swimming => "Swimming",
            Self::Volleyball => "Volleyball",
            Self::Badminton => "Badminton",
            Self::Hockey => "Hockey",
            Self::Other => "Other",
        }
    }

    /// Playing positions offered for this sport, first entry is the form default
    #[must_use]
    pub const fn positions(&self) -> &'static [&'static str] {
        match self {
            Self::Football => &[
                "Goalkeeper",
                "Defender",
                "Midfielder",
                "Forward/Striker",
                "Winger",
            ],
            Self::Cricket => &[
                "Batsman",
                "Bowler (Fast)",
                "Bowler (Spin)",
                "All-rounder",
                "Wicket-keeper",
            ],
            Self::Basketball => &[
                "Point Guard",
                "Shooting Guard",
                "Small Forward",
                "Power Forward",
                "Center",
            ],
            Self::Athletics => &[
                "Sprinter",
                "Middle Distance",
                "Long Distance",
                "Jumper",
                "Thrower",
            ],
            Self::Tennis => &[
                "Singles Player",
                "Doubles Player",
                "Baseline Player",
                "Serve-and-Volley",
            ],
            Self::Swimming => &[
                "Freestyle",
                "Backstroke",
                "Breaststroke",
                "Butterfly",
                "Individual Medley",
            ],
            Self::Volleyball => &[
                "Setter",
                "Outside Hitter",
                "Middle Blocker",
                "Libero",
                "Opposite Hitter",
            ],
            Self::Badminton => &["Singles Player", "Doubles Player", "Mixed Doubles"],
            Self::Hockey => &["Forward", "Midfielder", "Defender", "Goalkeeper"],
            Self::Other => &["General Athlete"],
        }
    }

    /// Default position for this sport
    #[must_use]
    pub fn default_position(&self) -> &'static str {
        self.positions().first().copied().unwrap_or("General")
    }

    /// Whether `position` is one of this sport's listed positions (case-insensitive)
    #[must_use]
    pub fn has_position(&self, position: &str) -> bool {
        self.positions()
            .iter()
            .any(|p| p.eq_ignore_ascii_case(position.trim()))
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sport {
    type Err = AppError;

    /// Accepts the full label ("Football/Soccer") or any of its slash-separated
    /// parts ("Football", "Soccer"), case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|sport| {
                let label = sport.label();
                label.eq_ignore_ascii_case(wanted)
                    || label
                        .split('/')
                        .any(|part| part.trim().eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| AppError::invalid_input(format!("Unknown sport '{wanted}'")))
    }
}
