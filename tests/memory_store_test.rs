// ABOUTME: Tests for the in-memory document store
// ABOUTME: Covers document round trips, history ordering, and push subscriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

use uuid::Uuid;
use workout_pal::bank::ExerciseBank;
use workout_pal::models::{ExerciseBankEntry, RepCount, SetLogRequest};
use workout_pal::store::{MemoryStore, UserStore};

fn entry(name: &str) -> ExerciseBankEntry {
    ExerciseBankEntry {
        name: name.to_owned(),
        sets: "3".to_owned(),
        reps: "10".to_owned(),
        info: String::new(),
    }
}

fn log_request(exercise: &str) -> SetLogRequest {
    SetLogRequest {
        workout_name: "Workout".to_owned(),
        exercise_name: exercise.to_owned(),
        sets: 1,
        reps: RepCount::Count(10),
        weight: 0.0,
    }
}

#[tokio::test]
async fn test_missing_documents_default_empty() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();

    assert!(store.load_bank(user_id).await.unwrap().is_empty());
    assert!(store.load_routine_text(user_id).await.unwrap().is_none());
    assert!(store.history(user_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_bank_round_trip() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();

    let bank = ExerciseBank {
        exercises: vec![entry("Push-ups"), entry("Squats")],
    };
    store.save_bank(user_id, &bank).await.unwrap();

    let loaded = store.load_bank(user_id).await.unwrap();
    assert_eq!(loaded, bank);
}

#[tokio::test]
async fn test_routine_text_persists_verbatim() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();

    let text = r#"{"Monday": [{"name": "A", "sets": "1", "reps": "1", "type": "exercise"}]}"#;
    store.save_routine_text(user_id, text).await.unwrap();

    let loaded = store.load_routine_text(user_id).await.unwrap().unwrap();
    assert_eq!(loaded, text);
}

#[tokio::test]
async fn test_users_are_isolated() {
    let store = MemoryStore::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    store
        .save_bank(
            alice,
            &ExerciseBank {
                exercises: vec![entry("Push-ups")],
            },
        )
        .await
        .unwrap();

    assert_eq!(store.load_bank(alice).await.unwrap().len(), 1);
    assert!(store.load_bank(bob).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_history_reads_newest_first() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();

    for name in ["First", "Second", "Third"] {
        store
            .append_logged_set(user_id, log_request(name))
            .await
            .unwrap();
    }

    let history = store.history(user_id).await.unwrap();
    let names: Vec<&str> = history.iter().map(|r| r.exercise_name.as_str()).collect();
    assert_eq!(names, ["Third", "Second", "First"]);
}

#[tokio::test]
async fn test_append_assigns_monotonic_timestamps_and_unique_ids() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();

    let mut records = Vec::new();
    for _ in 0..50 {
        records.push(
            store
                .append_logged_set(user_id, log_request("Push-ups"))
                .await
                .unwrap(),
        );
    }

    for pair in records.windows(2) {
        assert!(pair[1].recorded_at > pair[0].recorded_at);
        assert_ne!(pair[0].id, pair[1].id);
    }
}

#[tokio::test]
async fn test_bank_subscription_receives_snapshot_on_save() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();

    let mut rx = store.subscribe_bank(user_id).await;
    let bank = ExerciseBank {
        exercises: vec![entry("Plank")],
    };
    store.save_bank(user_id, &bank).await.unwrap();

    let snapshot = rx.recv().await.unwrap();
    assert_eq!(snapshot, bank);
}

#[tokio::test]
async fn test_routine_subscription_receives_raw_text() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();

    let mut rx = store.subscribe_routine(user_id).await;
    store.save_routine_text(user_id, "{}").await.unwrap();

    assert_eq!(rx.recv().await.unwrap(), "{}");
}

#[tokio::test]
async fn test_history_subscription_receives_full_snapshots() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();

    let mut rx = store.subscribe_history(user_id).await;
    store
        .append_logged_set(user_id, log_request("First"))
        .await
        .unwrap();
    store
        .append_logged_set(user_id, log_request("Second"))
        .await
        .unwrap();

    let first = rx.recv().await.unwrap();
    assert_eq!(first.len(), 1);
    let second = rx.recv().await.unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].exercise_name, "Second");
}

#[tokio::test]
async fn test_save_without_subscribers_succeeds() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();
    store
        .save_bank(user_id, &ExerciseBank::default())
        .await
        .unwrap();
}
