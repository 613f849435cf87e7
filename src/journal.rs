// ABOUTME: Manual workout log form validation and history access
// ABOUTME: Field-level checks before any write; history reads newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! Manual set logging.
//!
//! The manual log form accepts raw string input from the user. Validation
//! is pure: an incomplete or malformed form surfaces an inline error and
//! nothing is written. The workout name is optional and defaults to
//! "Manual Log".

use crate::errors::{AppError, AppResult};
use crate::models::{RepCount, SetLogRequest};

/// Default workout name for manual entries
pub const MANUAL_LOG_NAME: &str = "Manual Log";

/// Raw manual log form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualLogForm {
    /// Optional workout name; defaults to "Manual Log"
    pub workout_name: String,
    /// Exercise name, required
    pub exercise_name: String,
    /// Sets completed, required positive integer
    pub sets: String,
    /// Reps performed, required positive integer
    pub reps: String,
    /// Weight used, required non-negative number (0 for bodyweight)
    pub weight: String,
}

impl ManualLogForm {
    /// Validate the form and build a log request
    ///
    /// # Errors
    ///
    /// Returns a validation error if any required field is missing or
    /// fails to parse; no state is mutated.
    pub fn into_request(self) -> AppResult<SetLogRequest> {
        let exercise_name = required(&self.exercise_name, "exercise name")?;
        let sets = parse_positive(&self.sets, "sets")?;
        let reps = parse_positive(&self.reps, "reps")?;
        let weight = parse_weight(&self.weight)?;

        let workout_name = if self.workout_name.trim().is_empty() {
            MANUAL_LOG_NAME.to_owned()
        } else {
            self.workout_name.trim().to_owned()
        };

        Ok(SetLogRequest {
            workout_name,
            exercise_name,
            sets,
            reps: RepCount::Count(reps),
            weight,
        })
    }
}

fn required(value: &str, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_field(field));
    }
    Ok(trimmed.to_owned())
}

fn parse_positive(value: &str, field: &str) -> AppResult<u32> {
    let raw = required(value, field)?;
    match raw.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::invalid_input(format!(
            "Field '{field}' must be a positive whole number"
        ))),
    }
}

fn parse_weight(value: &str) -> AppResult<f64> {
    let raw = required(value, "weight")?;
    match raw.parse::<f64>() {
        Ok(w) if w >= 0.0 && w.is_finite() => Ok(w),
        _ => Err(AppError::invalid_input(
            "Field 'weight' must be a non-negative number",
        )),
    }
}
