// ABOUTME: Tests for the routine request flow: validation, retry timing, persistence
// ABOUTME: Uses a scripted provider and paused tokio time to assert backoff delays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use uuid::Uuid;
use workout_pal::bank::ExerciseBank;
use workout_pal::config::RetryConfig;
use workout_pal::errors::{AppError, AppResult, ErrorCode};
use workout_pal::generator::{build_prompt, routine_response_schema, RoutineGenerator};
use workout_pal::llm::{GenerateRequest, TextGenerator};
use workout_pal::models::ExerciseBankEntry;
use workout_pal::store::{MemoryStore, UserStore};

const VALID_ROUTINE: &str = r#"{
    "Monday": [
        {"name": "Push-ups", "sets": "3", "reps": "8-12", "type": "exercise"}
    ]
}"#;

/// Provider returning a scripted sequence of responses
struct ScriptedProvider {
    responses: Mutex<Vec<AppResult<String>>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    fn new(responses: Vec<AppResult<String>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted-model"
    }

    async fn generate(&self, _request: &GenerateRequest) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(AppError::external_service("script exhausted"));
        }
        responses.remove(0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

fn sample_bank() -> ExerciseBank {
    ExerciseBank {
        exercises: vec![ExerciseBankEntry {
            name: "Push-ups".to_owned(),
            sets: "3-4".to_owned(),
            reps: "8-12".to_owned(),
            info: "Chest, shoulders, triceps.".to_owned(),
        }],
    }
}

fn generator(
    provider: Arc<ScriptedProvider>,
    store: Arc<MemoryStore>,
) -> RoutineGenerator {
    RoutineGenerator::new(provider, store)
}

#[tokio::test]
async fn test_empty_bank_fails_without_provider_call() {
    let provider = Arc::new(ScriptedProvider::new(vec![Ok(VALID_ROUTINE.to_owned())]));
    let store = Arc::new(MemoryStore::new());
    let gen = generator(provider.clone(), store);

    let err = gen
        .generate(Uuid::new_v4(), &ExerciseBank::default(), 3)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_day_count_out_of_range_fails_without_provider_call() {
    let provider = Arc::new(ScriptedProvider::new(vec![Ok(VALID_ROUTINE.to_owned())]));
    let store = Arc::new(MemoryStore::new());
    let gen = generator(provider.clone(), store);

    for days in [0, 8] {
        let err = gen
            .generate(Uuid::new_v4(), &sample_bank(), days)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_success_persists_raw_payload_verbatim() {
    let provider = Arc::new(ScriptedProvider::new(vec![Ok(VALID_ROUTINE.to_owned())]));
    let store = Arc::new(MemoryStore::new());
    let gen = generator(provider.clone(), store.clone());
    let user_id = Uuid::new_v4();

    let routine = gen.generate(user_id, &sample_bank(), 3).await.unwrap();
    assert_eq!(routine.len(), 1);
    assert_eq!(provider.calls(), 1);

    let stored = store.load_routine_text(user_id).await.unwrap().unwrap();
    assert_eq!(stored, VALID_ROUTINE);
}

#[tokio::test(start_paused = true)]
async fn test_transient_failure_retries_then_succeeds() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Err(AppError::external_service("timeout")),
        Ok(VALID_ROUTINE.to_owned()),
    ]));
    let store = Arc::new(MemoryStore::new());
    let gen = generator(provider.clone(), store.clone());
    let user_id = Uuid::new_v4();

    let started = Instant::now();
    let routine = gen.generate(user_id, &sample_bank(), 3).await.unwrap();
    assert_eq!(routine.len(), 1);
    assert_eq!(provider.calls(), 2);
    // One failed attempt costs the 1 s base delay
    assert_eq!(started.elapsed(), Duration::from_secs(1));
    assert!(store.load_routine_text(user_id).await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_exhaustion_after_three_attempts_with_backoff() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Err(AppError::external_service("timeout")),
        Err(AppError::external_service("timeout")),
        Err(AppError::external_service("timeout")),
    ]));
    let store = Arc::new(MemoryStore::new());
    let gen = generator(provider.clone(), store.clone());
    let user_id = Uuid::new_v4();

    let started = Instant::now();
    let err = gen.generate(user_id, &sample_bank(), 3).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("multiple retries"));
    assert_eq!(provider.calls(), 3);
    // Delays of 1 s and 2 s between the three attempts; none after the last
    assert_eq!(started.elapsed(), Duration::from_secs(3));
    assert!(store.load_routine_text(user_id).await.unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_unparseable_response_counts_as_failed_attempt() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok("not json at all".to_owned()),
        Ok(r#"{"Monday": []}"#.to_owned()),
        Ok(VALID_ROUTINE.to_owned()),
    ]));
    let store = Arc::new(MemoryStore::new());
    let gen = generator(provider.clone(), store.clone());
    let user_id = Uuid::new_v4();

    let routine = gen.generate(user_id, &sample_bank(), 3).await.unwrap();
    assert_eq!(routine.len(), 1);
    assert_eq!(provider.calls(), 3);

    // Only the accepted payload was persisted
    let stored = store.load_routine_text(user_id).await.unwrap().unwrap();
    assert_eq!(stored, VALID_ROUTINE);
}

#[tokio::test(start_paused = true)]
async fn test_custom_retry_policy_is_honored() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Err(AppError::external_service("timeout")),
        Err(AppError::external_service("timeout")),
    ]));
    let store = Arc::new(MemoryStore::new());
    let gen = generator(provider.clone(), store).with_retry(RetryConfig {
        max_attempts: 2,
        base_delay: Duration::from_millis(500),
    });

    let started = Instant::now();
    let err = gen
        .generate(Uuid::new_v4(), &sample_bank(), 3)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(provider.calls(), 2);
    assert_eq!(started.elapsed(), Duration::from_millis(500));
}

#[test]
fn test_prompt_includes_bank_summary_and_day_count() {
    let prompt = build_prompt(&sample_bank(), 4);
    assert!(prompt.contains("Push-ups (3-4 sets, 8-12 reps)"));
    assert!(prompt.contains("4 day per week"));
    assert!(prompt.contains("Only return the JSON object"));
}

#[test]
fn test_response_schema_shape() {
    let schema = routine_response_schema();
    assert_eq!(schema["type"], "OBJECT");
    let items = &schema["additionalProperties"]["items"];
    assert_eq!(items["type"], "OBJECT");
    let required = items["required"].as_array().unwrap();
    assert_eq!(required.len(), 4);
    assert!(required.iter().any(|v| v == "type"));
}

#[test]
fn test_retry_delay_schedule() {
    let retry = RetryConfig::default();
    assert_eq!(retry.max_attempts, 3);
    assert_eq!(retry.delay_after(1), Duration::from_secs(1));
    assert_eq!(retry.delay_after(2), Duration::from_secs(2));
    assert_eq!(retry.delay_after(3), Duration::from_secs(4));
}
