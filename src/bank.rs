// ABOUTME: Exercise bank document and add/remove toggle semantics
// ABOUTME: Per-user curated exercise list keyed by exercise name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! User-curated exercise bank.
//!
//! The bank is stored as a single per-user document `{ "exercises": [...] }`
//! and mutated only through the add/remove toggle. Exercise names are the
//! uniqueness key.

use serde::{Deserialize, Serialize};

use crate::models::ExerciseBankEntry;

/// The per-user exercise bank document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseBank {
    /// Curated exercises, insertion-ordered
    pub exercises: Vec<ExerciseBankEntry>,
}

/// Outcome of a bank toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankChange {
    /// The exercise was added to the bank
    Added(String),
    /// The exercise was removed from the bank
    Removed(String),
}

impl BankChange {
    /// User-facing confirmation message
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Added(name) => format!("Added \"{name}\" to your bank."),
            Self::Removed(name) => format!("Removed \"{name}\" from your bank."),
        }
    }
}

impl ExerciseBank {
    /// Whether the bank contains an exercise with the given name
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.exercises.iter().any(|entry| entry.name == name)
    }

    /// Add the entry if absent, remove it if present
    pub fn toggle(&mut self, entry: ExerciseBankEntry) -> BankChange {
        if self.contains(&entry.name) {
            let name = entry.name;
            self.exercises.retain(|existing| existing.name != name);
            BankChange::Removed(name)
        } else {
            let name = entry.name.clone();
            self.exercises.push(entry);
            BankChange::Added(name)
        }
    }

    /// Number of curated exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the bank is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// One-line summary for the generation prompt,
    /// e.g. `Squats (3-4 sets, 8-15 reps), Plank (3 sets, 30-60 seconds hold reps)`
    #[must_use]
    pub fn summary(&self) -> String {
        self.exercises
            .iter()
            .map(|entry| format!("{} ({} sets, {} reps)", entry.name, entry.sets, entry.reps))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
