// ABOUTME: Guided workout session state machine over an ordered step sequence
// ABOUTME: Advances set by set, emitting one log request per completed exercise set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! # Guided Workout Session
//!
//! Walks the user through a fixed ordered sequence of routine steps, each
//! with a target set count. State is `{step_index, set_index, active}` over
//! a fixed step slice; the only transition is [`GuidedSession::advance`]:
//!
//! 1. If the current step is an exercise, emit one set-log request for it
//!    (one record per advance, not one per whole step).
//! 2. If sets remain on the current step, move to the next set.
//! 3. Else if steps remain, move to the next step at set 0.
//! 4. Else deactivate and raise completion with a suggestion message.
//!
//! There are no backward or error transitions. The session never touches
//! the store: it emits [`SetLogRequest`] values and the driver persists
//! them, so the walk stays a pure state transition.

use crate::errors::{AppError, AppResult};
use crate::models::{target_set_count, RepCount, RoutineStep, SetLogRequest};

/// Suggestion shown when the session completes
pub const COMPLETION_SUGGESTION: &str = "Great job! For progressive overload next week, try adding \
    1-2 more reps per set, increasing a set, or slightly decreasing your rest time (e.g., from \
    90s to 60s). Keep challenging yourselves!";

/// Where an advance landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Same step, next set (1-based set number)
    NextSet(u32),
    /// Moved to the next step (0-based step index)
    NextStep(usize),
    /// Session finished; terminal
    Completed,
}

/// Result of one advance call
#[derive(Debug, Clone, PartialEq)]
pub struct Advancement {
    /// Log request emitted for the set just completed, if the step was an
    /// exercise
    pub log: Option<SetLogRequest>,
    /// Where the session landed
    pub outcome: AdvanceOutcome,
}

/// Transient guided-session state; never persisted except as the individual
/// logged sets it emits while progressing
#[derive(Debug, Clone)]
pub struct GuidedSession {
    workout_name: String,
    steps: Vec<RoutineStep>,
    step_index: usize,
    set_index: u32,
    active: bool,
    suggestion: Option<&'static str>,
}

impl GuidedSession {
    /// Start a session over the given step sequence
    ///
    /// # Errors
    ///
    /// Returns a validation error if the step sequence is empty.
    pub fn start(workout_name: impl Into<String>, steps: Vec<RoutineStep>) -> AppResult<Self> {
        if steps.is_empty() {
            return Err(AppError::invalid_input(
                "No workout planned for today. Please generate a routine first!",
            ));
        }
        Ok(Self {
            workout_name: workout_name.into(),
            steps,
            step_index: 0,
            set_index: 0,
            active: true,
            suggestion: None,
        })
    }

    /// Whether the session is still in progress
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The step currently being performed, while active
    #[must_use]
    pub fn current_step(&self) -> Option<&RoutineStep> {
        if self.active {
            self.steps.get(self.step_index)
        } else {
            None
        }
    }

    /// 1-based set number within the current step
    #[must_use]
    pub const fn set_number(&self) -> u32 {
        self.set_index + 1
    }

    /// Target set count of the current step, while active
    #[must_use]
    pub fn target_sets(&self) -> Option<u32> {
        self.current_step().map(|step| target_set_count(&step.sets))
    }

    /// Trailing suggestion message, set on completion
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        self.suggestion
    }

    /// Advance to the next set, step, or completion
    ///
    /// Exactly one log request is emitted per call where the current step
    /// (before advancing) is an exercise; warm-up sets are not logged.
    /// Advancing a completed session is a no-op that reports completion.
    pub fn advance(&mut self) -> Advancement {
        let Some(step) = self.steps.get(self.step_index) else {
            return Advancement {
                log: None,
                outcome: AdvanceOutcome::Completed,
            };
        };
        if !self.active {
            return Advancement {
                log: None,
                outcome: AdvanceOutcome::Completed,
            };
        }

        let log = step.kind.is_exercise().then(|| SetLogRequest {
            workout_name: self.workout_name.clone(),
            exercise_name: step.name.clone(),
            sets: 1,
            reps: RepCount::from_reps_str(&step.reps),
            weight: 0.0,
        });

        let target = target_set_count(&step.sets);
        let outcome = if self.set_index + 1 < target {
            self.set_index += 1;
            AdvanceOutcome::NextSet(self.set_number())
        } else if self.step_index + 1 < self.steps.len() {
            self.step_index += 1;
            self.set_index = 0;
            AdvanceOutcome::NextStep(self.step_index)
        } else {
            self.active = false;
            self.suggestion = Some(COMPLETION_SUGGESTION);
            AdvanceOutcome::Completed
        };

        Advancement { log, outcome }
    }

    /// Total advances required to complete the whole step sequence
    #[must_use]
    pub fn total_advances(&self) -> u32 {
        self.steps
            .iter()
            .map(|step| target_set_count(&step.sets))
            .sum()
    }
}
