// ABOUTME: Reference table model shown next to generated coaching plans
// ABOUTME: Column-oriented rectangular tables with a plain-text grid renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 CoachBot Contributors

//! # Reference Tables
//!
//! Illustrative sample data rendered under every plan. Tables never read the
//! model response; they depend only on the selected feature and a handful of
//! profile-derived [`TableOptions`].
//!
//! A [`Table`] is an ordered list of named [`Column`]s. Construction goes
//! through [`Table::new`], which truncates every column to the shortest one,
//! so all columns of a table always have the same length.

mod generators;
mod layout;

use std::fmt;

use serde::Serialize;

pub use generators::{
    endurance_training_types, exercise_routine, general_distribution, injury_recovery_timeline,
    meal_calorie_distribution, nutrition_macros, progress_tracking, recovery_activities,
    session_phase_split, training_distribution, weekly_meal_plan, weekly_training_schedule,
    MAX_PROGRESS_WEEKS, MIN_PROGRESS_WEEKS,
};
pub use layout::{reference_sheet, ReferenceLayout, ReferenceSheet, TableOptions, TitledTable};

/// One scalar table value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Free text
    Text(String),
    /// Whole number
    Int(i64),
    /// Decimal number, rendered with one decimal place
    Float(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:.1}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Named column of cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Header label
    pub name: String,
    /// Values top to bottom
    pub values: Vec<Cell>,
}

impl Column {
    /// Build a column from anything convertible into cells
    #[must_use]
    pub fn new<I, T>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Cell>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of values in the column
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column holds no values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Rectangular column-oriented table
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, truncating every column to the shortest one
    #[must_use]
    pub fn new(mut columns: Vec<Column>) -> Self {
        let rows = columns.iter().map(Column::len).min().unwrap_or(0);
        for column in &mut columns {
            column.values.truncate(rows);
        }
        Self { columns }
    }

    /// Number of rows (zero for a table without columns)
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Header labels in column order
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// All columns in order
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by header label
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Project the table onto the named columns, in the order given.
    /// Names that do not exist are skipped.
    #[must_use]
    pub fn select(&self, names: &[&str]) -> Self {
        let columns = names
            .iter()
            .filter_map(|name| self.column(name).cloned())
            .collect();
        Self::new(columns)
    }

    /// Row-major view of the cells
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<&Cell>> {
        (0..self.row_count())
            .map(|row| self.columns.iter().map(|c| &c.values[row]).collect())
            .collect()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(ToString::to_string).collect())
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                rendered
                    .iter()
                    .map(|row| row[idx].chars().count())
                    .chain(std::iter::once(column.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let write_row = |f: &mut fmt::Formatter<'_>, cells: &[&str]| -> fmt::Result {
            let line = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{}", line.trim_end())
        };

        write_row(f, &self.column_names())?;
        let rule = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{rule}")?;
        for row in &rendered {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            write_row(f, &cells)?;
        }
        Ok(())
    }
}
