// ABOUTME: Routine request flow: validate, prompt, retry with backoff, persist
// ABOUTME: Three attempts with exponential delay, raw payload persisted verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! # Routine Generation
//!
//! Requests a structured weekly plan from the text-generation collaborator,
//! given the user's exercise bank and a requested day count, and persists
//! the accepted result.
//!
//! Preconditions are checked before any network call: a non-empty bank and
//! a day count in 1..=7. The request carries a response-schema constraint
//! (object keyed by weekday, arrays of step objects with required
//! name/sets/reps/type fields); a response that fails to parse as that
//! shape counts as a retryable failure, not a fatal one.
//!
//! Up to three attempts total, with delays of `base_delay * 2^(n-2)` before
//! attempt n (1 s and 2 s at the default base delay). After exhaustion a
//! single terminal error surfaces and nothing is stored. On first success
//! the raw payload is persisted verbatim and the parsed routine returned.

use std::sync::Arc;

use serde_json::{json, Value};
use tokio::time::sleep;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::bank::ExerciseBank;
use crate::config::RetryConfig;
use crate::errors::{AppError, AppResult};
use crate::llm::{GenerateRequest, TextGenerator};
use crate::models::Routine;
use crate::store::UserStore;

/// Terminal message after exhausting all attempts
const EXHAUSTED_MESSAGE: &str =
    "Failed to generate plan after multiple retries. Please try again later.";

/// Routine request driver around the text-generation collaborator
pub struct RoutineGenerator {
    provider: Arc<dyn TextGenerator>,
    store: Arc<dyn UserStore>,
    retry: RetryConfig,
}

impl RoutineGenerator {
    /// Create a generator with the default retry policy
    #[must_use]
    pub fn new(provider: Arc<dyn TextGenerator>, store: Arc<dyn UserStore>) -> Self {
        Self {
            provider,
            store,
            retry: RetryConfig::default(),
        }
    }

    /// Override the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Generate and persist a weekly routine
    ///
    /// # Errors
    ///
    /// Returns a validation error (no network call made) for an empty bank
    /// or an out-of-range day count, a storage error if persisting the
    /// accepted payload fails, and a terminal external-service error after
    /// all attempts are exhausted.
    #[instrument(skip(self, bank), fields(user.id = %user_id, exercises = bank.len()))]
    pub async fn generate(
        &self,
        user_id: Uuid,
        bank: &ExerciseBank,
        days_per_week: u32,
    ) -> AppResult<Routine> {
        if bank.is_empty() {
            return Err(AppError::invalid_input(
                "Please add exercises to 'My Exercise Bank' first.",
            ));
        }
        if !(1..=7).contains(&days_per_week) {
            return Err(AppError::out_of_range(
                "Please specify a valid number of workout days (1-7).",
            ));
        }

        let request = GenerateRequest::new(build_prompt(bank, days_per_week))
            .with_response_schema(routine_response_schema());

        let mut last_error = None;
        for attempt in 1..=self.retry.max_attempts {
            match self.attempt(&request).await {
                Ok((raw, routine)) => {
                    self.store.save_routine_text(user_id, &raw).await?;
                    info!(attempt, days = routine.len(), "Routine generated and persisted");
                    return Ok(routine);
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Routine generation attempt failed");
                    last_error = Some(e);
                    if attempt < self.retry.max_attempts {
                        sleep(self.retry.delay_after(attempt)).await;
                    }
                }
            }
        }

        let mut terminal = AppError::external_service(EXHAUSTED_MESSAGE);
        if let Some(source) = last_error {
            terminal = terminal.with_source(source);
        }
        Err(terminal)
    }

    /// One provider call plus schema validation of the returned text
    async fn attempt(&self, request: &GenerateRequest) -> AppResult<(String, Routine)> {
        let raw = self.provider.generate(request).await?;
        let routine = Routine::parse(&raw)?;
        Ok((raw, routine))
    }
}

/// Build the generation prompt from the bank summary and day count
#[must_use]
pub fn build_prompt(bank: &ExerciseBank, days_per_week: u32) -> String {
    format!(
        "Given these home exercises from the user's bank: {}. Create a {days_per_week} day per \
         week home workout routine. Each workout day should include a short warm-up (e.g., \"5 \
         minutes of light cardio and dynamic stretches\") and then list the exercises with \
         suggested sets and reps. Distribute exercises logically across days (e.g., full-body, \
         upper/lower split, or push/pull/legs if enough exercises). Provide the output as a JSON \
         object with keys as day names (e.g., \"Monday\", \"Tuesday\") and values as an array of \
         exercise objects. Each exercise object should have 'name', 'sets', 'reps', and 'type' \
         ('warmup' or 'exercise'). Ensure all exercises from the provided list are used if \
         possible. Only return the JSON object, with no other text or markdown outside the JSON.",
        bank.summary()
    )
}

/// Machine-checkable response schema: object keyed by weekday, each value an
/// array of step objects with required name/sets/reps/type fields
#[must_use]
pub fn routine_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "additionalProperties": {
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING" },
                    "sets": { "type": "STRING" },
                    "reps": { "type": "STRING" },
                    "type": { "type": "STRING", "enum": ["warmup", "exercise"] }
                },
                "required": ["name", "sets", "reps", "type"]
            }
        }
    })
}
