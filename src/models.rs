// ABOUTME: Core data model for exercises, routines, routine steps, and logged sets
// ABOUTME: Weekday-keyed routine map with set-count and rep-target resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! # Data Model
//!
//! Common data structures shared by the exercise bank, the routine
//! generator, the guided session, and the workout journal.
//!
//! A [`Routine`] maps weekdays to ordered sequences of [`RoutineStep`]s.
//! The map is serialized as a JSON object keyed by English day names, the
//! exact shape produced by the text-generation collaborator and persisted
//! verbatim by the store.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// One exercise in the user's curated bank
///
/// Uniqueness key is `name`; `sets` and `reps` are free-form strings
/// ("3-4", "AMRAP (As Many Reps As Possible)") exactly as curated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseBankEntry {
    /// Exercise name, unique within the bank
    pub name: String,
    /// Target sets, numeric or range (e.g. "3-4")
    pub sets: String,
    /// Target reps, numeric or free text (e.g. "AMRAP")
    pub reps: String,
    /// Short description of the exercise
    pub info: String,
}

/// Kind of a routine step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Warm-up step; completed sets are not logged
    Warmup,
    /// Exercise step; one set is logged per advance
    Exercise,
}

impl StepKind {
    /// Whether completed sets of this step are logged
    #[must_use]
    pub const fn is_exercise(self) -> bool {
        matches!(self, Self::Exercise)
    }
}

/// One warm-up or exercise entry within a routine day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineStep {
    /// Step name
    pub name: String,
    /// Target sets, numeric or range
    pub sets: String,
    /// Target reps, numeric or free text
    pub reps: String,
    /// Warm-up or exercise
    #[serde(rename = "type")]
    pub kind: StepKind,
}

/// Day of the week, serialized as its English name
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    /// Sunday
    Sunday,
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
}

impl Weekday {
    /// All seven days in calendar order starting Sunday
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// English day name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Today's weekday in the local timezone
    #[must_use]
    pub fn today() -> Self {
        Local::now().weekday().into()
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("Unknown weekday: {s}")))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

/// Weekly plan mapping weekday to an ordered list of steps
///
/// Invariant: every day present in the map has a non-empty step sequence.
/// Days with empty sequences are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Routine {
    days: BTreeMap<Weekday, Vec<RoutineStep>>,
}

impl Routine {
    /// Build a routine from a day map, dropping empty day sequences
    #[must_use]
    pub fn from_days(days: BTreeMap<Weekday, Vec<RoutineStep>>) -> Self {
        let mut kept = BTreeMap::new();
        for (day, steps) in days {
            if steps.is_empty() {
                warn!(day = %day, "Dropping empty day from routine");
            } else {
                kept.insert(day, steps);
            }
        }
        Self { days: kept }
    }

    /// Parse a routine from its serialized JSON text
    ///
    /// The text must be a JSON object keyed by weekday names whose values
    /// are arrays of step objects. A routine with no non-empty day is
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the text does not match the
    /// expected shape or yields no workout days.
    pub fn parse(text: &str) -> AppResult<Self> {
        let days: BTreeMap<Weekday, Vec<RoutineStep>> = serde_json::from_str(text)
            .map_err(|e| AppError::serialization(format!("Malformed routine JSON: {e}")))?;
        let routine = Self::from_days(days);
        if routine.is_empty() {
            return Err(AppError::serialization(
                "Routine contains no workout days",
            ));
        }
        Ok(routine)
    }

    /// Serialize the routine to JSON text
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(AppError::from)
    }

    /// Steps planned for the given day, if any
    #[must_use]
    pub fn day(&self, day: Weekday) -> Option<&[RoutineStep]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Iterate planned days in calendar order starting Sunday
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[RoutineStep])> {
        self.days.iter().map(|(day, steps)| (*day, steps.as_slice()))
    }

    /// Number of planned days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no day is planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Resolve a step's target set count from its `sets` string
///
/// A range ("3-4") resolves to its upper bound; a plain integer resolves
/// directly. Malformed or non-positive values fall back to 1 so a step is
/// always worth at least one advance.
#[must_use]
pub fn target_set_count(sets: &str) -> u32 {
    let trimmed = sets.trim();
    let candidate = trimmed
        .split_once('-')
        .map_or(trimmed, |(_, upper)| upper.trim());
    match candidate.parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => 1,
    }
}

/// Rep target recorded on a logged set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepCount {
    /// A concrete rep count
    Count(u32),
    /// As many reps as possible, carried through verbatim
    Amrap,
}

impl RepCount {
    /// Resolve a rep target from a step's `reps` string
    ///
    /// Strings mentioning AMRAP pass through as [`RepCount::Amrap`];
    /// otherwise the leading integer is taken ("8-12" resolves to 8), with
    /// a fallback of 1 when no digits lead the string.
    #[must_use]
    pub fn from_reps_str(reps: &str) -> Self {
        if reps.to_ascii_uppercase().contains("AMRAP") {
            return Self::Amrap;
        }
        let digits: String = reps
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        match digits.parse::<u32>() {
            Ok(n) if n >= 1 => Self::Count(n),
            _ => Self::Count(1),
        }
    }
}

impl Display for RepCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Amrap => f.write_str("AMRAP"),
        }
    }
}

impl Serialize for RepCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Count(n) => serializer.serialize_u32(*n),
            Self::Amrap => serializer.serialize_str("AMRAP"),
        }
    }
}

impl<'de> Deserialize<'de> for RepCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(Self::Count(n)),
            Raw::Text(text) if text.to_ascii_uppercase().contains("AMRAP") => Ok(Self::Amrap),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "invalid rep count: {text}"
            ))),
        }
    }
}

/// A set-completion record awaiting persistence
///
/// The store assigns the server timestamp and record id on append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLogRequest {
    /// Workout the set belongs to
    pub workout_name: String,
    /// Exercise performed
    pub exercise_name: String,
    /// Sets completed by this record (one per guided advance)
    pub sets: u32,
    /// Reps performed, or AMRAP verbatim
    pub reps: RepCount,
    /// Weight used; 0 for bodyweight
    pub weight: f64,
}

/// One persisted record of a single completed set
///
/// Immutable once created; the history collection is append-only and read
/// in descending timestamp order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedSet {
    /// Record identifier assigned by the store
    pub id: Uuid,
    /// Workout the set belongs to
    pub workout_name: String,
    /// Exercise performed
    pub exercise_name: String,
    /// Sets completed by this record
    pub sets: u32,
    /// Reps performed, or AMRAP verbatim
    pub reps: RepCount,
    /// Weight used; 0 for bodyweight
    pub weight: f64,
    /// Server-assigned, monotonically non-decreasing timestamp
    #[serde(rename = "timestamp")]
    pub recorded_at: DateTime<Utc>,
}

impl LoggedSet {
    /// Materialize a pending request into a persisted record
    #[must_use]
    pub fn from_request(request: SetLogRequest, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            workout_name: request.workout_name,
            exercise_name: request.exercise_name,
            sets: request.sets,
            reps: request.reps,
            weight: request.weight,
            recorded_at,
        }
    }
}
