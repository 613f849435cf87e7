// ABOUTME: Tests for the guided workout session state machine
// ABOUTME: Covers set/step transitions, terminality, and per-set log emission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

use workout_pal::models::{target_set_count, RepCount, RoutineStep, StepKind};
use workout_pal::session::{AdvanceOutcome, GuidedSession, COMPLETION_SUGGESTION};

fn step(name: &str, sets: &str, reps: &str, kind: StepKind) -> RoutineStep {
    RoutineStep {
        name: name.to_owned(),
        sets: sets.to_owned(),
        reps: reps.to_owned(),
        kind,
    }
}

fn sample_day() -> Vec<RoutineStep> {
    vec![
        step("Warm-up", "1", "5 minutes", StepKind::Warmup),
        step("Push-ups", "3", "8-12", StepKind::Exercise),
        step("Plank", "2", "30-60 seconds hold", StepKind::Exercise),
    ]
}

#[test]
fn test_start_rejects_empty_steps() {
    let result = GuidedSession::start("Workout", vec![]);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_start_begins_at_first_step_first_set() {
    let session = GuidedSession::start("Workout", sample_day()).unwrap();
    assert!(session.is_active());
    assert_eq!(session.current_step().unwrap().name, "Warm-up");
    assert_eq!(session.set_number(), 1);
    assert_eq!(session.target_sets(), Some(1));
    assert!(session.suggestion().is_none());
}

#[test]
fn test_target_set_count_resolution() {
    assert_eq!(target_set_count("5"), 5);
    assert_eq!(target_set_count("3-4"), 4);
    assert_eq!(target_set_count(" 2 - 3 "), 3);
    assert_eq!(target_set_count("0"), 1);
    assert_eq!(target_set_count("lots"), 1);
    assert_eq!(target_set_count(""), 1);
}

#[test]
fn test_advance_within_step_increments_set() {
    let mut session = GuidedSession::start(
        "Workout",
        vec![step("Squats", "3", "10", StepKind::Exercise)],
    )
    .unwrap();

    let advancement = session.advance();
    assert_eq!(advancement.outcome, AdvanceOutcome::NextSet(2));
    assert_eq!(session.set_number(), 2);
    assert!(session.is_active());
}

#[test]
fn test_advance_past_last_set_moves_to_next_step() {
    let mut session = GuidedSession::start(
        "Workout",
        vec![
            step("Warm-up", "1", "5 minutes", StepKind::Warmup),
            step("Squats", "3", "10", StepKind::Exercise),
        ],
    )
    .unwrap();

    let advancement = session.advance();
    assert_eq!(advancement.outcome, AdvanceOutcome::NextStep(1));
    assert_eq!(session.current_step().unwrap().name, "Squats");
    assert_eq!(session.set_number(), 1);
}

#[test]
fn test_warmup_steps_emit_no_log() {
    let mut session = GuidedSession::start(
        "Workout",
        vec![
            step("Warm-up", "1", "5 minutes", StepKind::Warmup),
            step("Squats", "1", "10", StepKind::Exercise),
        ],
    )
    .unwrap();

    let first = session.advance();
    assert!(first.log.is_none());

    let second = session.advance();
    let log = second.log.unwrap();
    assert_eq!(log.exercise_name, "Squats");
    assert_eq!(log.sets, 1);
    assert_eq!(log.reps, RepCount::Count(10));
    assert!((log.weight - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_one_log_per_advance_on_exercise_steps() {
    let mut session = GuidedSession::start(
        "Workout",
        vec![step("Push-ups", "3", "8-12", StepKind::Exercise)],
    )
    .unwrap();

    let mut logs = 0;
    while session.is_active() {
        if session.advance().log.is_some() {
            logs += 1;
        }
    }
    // One record per completed set, not one per step
    assert_eq!(logs, 3);
}

#[test]
fn test_amrap_reps_pass_through() {
    let mut session = GuidedSession::start(
        "Workout",
        vec![step(
            "Push-ups",
            "1",
            "AMRAP (As Many Reps As Possible)",
            StepKind::Exercise,
        )],
    )
    .unwrap();

    let log = session.advance().log.unwrap();
    assert_eq!(log.reps, RepCount::Amrap);
}

#[test]
fn test_session_completes_after_sum_of_target_counts() {
    let steps = sample_day();
    let mut session = GuidedSession::start("Workout", steps).unwrap();
    let total = session.total_advances();
    assert_eq!(total, 6);

    for i in 0..total {
        assert!(session.is_active(), "inactive before advance {i}");
        session.advance();
    }
    assert!(!session.is_active());
    assert_eq!(session.suggestion(), Some(COMPLETION_SUGGESTION));
    assert!(session.current_step().is_none());
}

#[test]
fn test_session_not_terminal_one_advance_early() {
    let mut session = GuidedSession::start("Workout", sample_day()).unwrap();
    let total = session.total_advances();

    for _ in 0..total - 1 {
        session.advance();
    }
    assert!(session.is_active());
    assert!(session.suggestion().is_none());
}

#[test]
fn test_final_advance_reports_completed_with_log() {
    let mut session = GuidedSession::start(
        "Workout",
        vec![step("Squats", "1", "10", StepKind::Exercise)],
    )
    .unwrap();

    let advancement = session.advance();
    assert_eq!(advancement.outcome, AdvanceOutcome::Completed);
    assert!(advancement.log.is_some());
    assert!(!session.is_active());
}

#[test]
fn test_advancing_completed_session_is_noop() {
    let mut session = GuidedSession::start(
        "Workout",
        vec![step("Squats", "1", "10", StepKind::Exercise)],
    )
    .unwrap();
    session.advance();

    let again = session.advance();
    assert_eq!(again.outcome, AdvanceOutcome::Completed);
    assert!(again.log.is_none());
}

#[test]
fn test_full_walk_emits_logs_in_step_order() {
    let mut session = GuidedSession::start("Workout", sample_day()).unwrap();

    let mut names = Vec::new();
    while session.is_active() {
        if let Some(log) = session.advance().log {
            assert_eq!(log.workout_name, "Workout");
            names.push(log.exercise_name);
        }
    }
    assert_eq!(names, ["Push-ups", "Push-ups", "Push-ups", "Plank", "Plank"]);
}

#[test]
fn test_range_sets_use_upper_bound() {
    let session = GuidedSession::start(
        "Workout",
        vec![step("Push-ups", "3-4", "8-12", StepKind::Exercise)],
    )
    .unwrap();
    assert_eq!(session.target_sets(), Some(4));
    assert_eq!(session.total_advances(), 4);
}
