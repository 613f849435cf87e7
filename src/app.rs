// ABOUTME: Application context tying the bank, generator, session, and history together
// ABOUTME: Single-threaded reducer applying store subscription snapshots as events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! # Application Context
//!
//! All mutable state lives in an explicit [`AppState`] owned by a single
//! control flow and updated atomically between events. Backend
//! subscription results are not ambient globals: they arrive as
//! [`StateEvent`] values on a channel and a single-threaded reducer
//! ([`AppState::apply`]) folds each into its own slice of state, with no
//! cross-invalidation between the three streams.
//!
//! [`WorkoutApp`] is the driver: it owns the store and generator handles,
//! runs the operations the views invoke, and persists every set-log
//! request the guided session emits.

use std::sync::Arc;

use chrono::Local;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::bank::{BankChange, ExerciseBank};
use crate::errors::{AppError, AppResult};
use crate::generator::RoutineGenerator;
use crate::journal::ManualLogForm;
use crate::models::{ExerciseBankEntry, LoggedSet, Routine, RoutineStep, Weekday};
use crate::session::{Advancement, GuidedSession};
use crate::store::UserStore;

/// Snapshot of per-user application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The user's curated exercise bank
    pub bank: ExerciseBank,
    /// The current weekly routine, if one has been generated
    pub routine: Option<Routine>,
    /// Logged history, newest first
    pub history: Vec<LoggedSet>,
}

/// Inbound state-change event from a backend subscription
#[derive(Debug, Clone)]
pub enum StateEvent {
    /// The exercise-bank document changed
    BankChanged(ExerciseBank),
    /// The routine document changed; carries the raw serialized text
    RoutineChanged(String),
    /// The history collection changed; snapshot is newest first
    HistoryChanged(Vec<LoggedSet>),
}

impl AppState {
    /// Fold one subscription event into state
    ///
    /// Each event updates only its own slice. A routine snapshot that
    /// fails to parse leaves the current routine unchanged and surfaces
    /// the error.
    pub fn apply(&mut self, event: StateEvent) -> AppResult<()> {
        match event {
            StateEvent::BankChanged(bank) => {
                self.bank = bank;
            }
            StateEvent::RoutineChanged(text) => {
                let routine = Routine::parse(&text).map_err(|e| {
                    warn!(error = %e, "Ignoring unparseable routine snapshot");
                    AppError::serialization("Failed to load your workout routine.").with_source(e)
                })?;
                self.routine = Some(routine);
            }
            StateEvent::HistoryChanged(history) => {
                self.history = history;
            }
        }
        Ok(())
    }
}

/// Result of one guided-session advance, including any log-write failure
///
/// A failed log write degrades to a visible message while the session
/// remains usable: the advancement has already happened and is reported
/// alongside the error.
#[derive(Debug)]
pub struct AdvanceReport {
    /// The state-machine transition that occurred
    pub advancement: Advancement,
    /// Error from persisting the emitted set log, if any
    pub log_error: Option<AppError>,
}

/// Application driver for one signed-in user
pub struct WorkoutApp {
    user_id: Uuid,
    store: Arc<dyn UserStore>,
    generator: RoutineGenerator,
    state: AppState,
    session: Option<GuidedSession>,
}

impl WorkoutApp {
    /// Load the initial state snapshot for a user
    ///
    /// # Errors
    ///
    /// Returns a storage error if any document read fails. A stored
    /// routine that no longer parses is dropped with a warning rather
    /// than failing startup.
    pub async fn load(
        user_id: Uuid,
        store: Arc<dyn UserStore>,
        generator: RoutineGenerator,
    ) -> AppResult<Self> {
        let bank = store.load_bank(user_id).await?;
        let routine = match store.load_routine_text(user_id).await? {
            Some(text) => match Routine::parse(&text) {
                Ok(routine) => Some(routine),
                Err(e) => {
                    warn!(user.id = %user_id, error = %e, "Stored routine is unreadable");
                    None
                }
            },
            None => None,
        };
        let history = store.history(user_id).await?;

        info!(
            user.id = %user_id,
            exercises = bank.len(),
            has_routine = routine.is_some(),
            logged_sets = history.len(),
            "Loaded user state"
        );

        Ok(Self {
            user_id,
            store,
            generator,
            state: AppState {
                bank,
                routine,
                history,
            },
            session: None,
        })
    }

    /// Current state snapshot
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The guided session, if one has been started
    #[must_use]
    pub const fn session(&self) -> Option<&GuidedSession> {
        self.session.as_ref()
    }

    /// Fold one subscription event into local state
    pub fn apply_event(&mut self, event: StateEvent) -> AppResult<()> {
        self.state.apply(event)
    }

    /// Add or remove an exercise from the bank and persist the change
    ///
    /// Local state is committed only after the store write succeeds; on
    /// failure the bank rolls back to its last-known-good contents.
    pub async fn toggle_exercise(&mut self, entry: ExerciseBankEntry) -> AppResult<BankChange> {
        let mut updated = self.state.bank.clone();
        let change = updated.toggle(entry);
        self.store.save_bank(self.user_id, &updated).await?;
        self.state.bank = updated;
        Ok(change)
    }

    /// Validate and persist one manual log entry
    pub async fn log_manual(&mut self, form: ManualLogForm) -> AppResult<LoggedSet> {
        let request = form.into_request()?;
        self.store.append_logged_set(self.user_id, request).await
    }

    /// Request, accept, and persist a generated weekly routine
    pub async fn generate_routine(&mut self, days_per_week: u32) -> AppResult<Routine> {
        let routine = self
            .generator
            .generate(self.user_id, &self.state.bank, days_per_week)
            .await?;
        self.state.routine = Some(routine.clone());
        Ok(routine)
    }

    /// Steps planned for the given day, if any
    #[must_use]
    pub fn workout_for(&self, day: Weekday) -> Option<&[RoutineStep]> {
        self.state.routine.as_ref().and_then(|routine| routine.day(day))
    }

    /// Steps planned for today (local timezone), if any
    #[must_use]
    pub fn today_workout(&self) -> Option<&[RoutineStep]> {
        self.workout_for(Weekday::today())
    }

    /// Start a guided session over the given day's plan
    ///
    /// # Errors
    ///
    /// Returns a validation error when no workout is planned for the day.
    pub fn start_workout(&mut self, day: Weekday) -> AppResult<()> {
        let steps = self.workout_for(day).map(<[RoutineStep]>::to_vec).ok_or_else(|| {
            AppError::invalid_input(
                "No workout planned for today. Please generate a routine first!",
            )
        })?;
        let workout_name = format!("Routine Workout ({})", Local::now().format("%Y-%m-%d"));
        self.session = Some(GuidedSession::start(workout_name, steps)?);
        info!(user.id = %self.user_id, day = %day, "Guided session started");
        Ok(())
    }

    /// Start a guided session over today's plan
    pub fn start_today(&mut self) -> AppResult<()> {
        self.start_workout(Weekday::today())
    }

    /// Advance the guided session, persisting the emitted set log if any
    ///
    /// # Errors
    ///
    /// Returns a validation error when no session is active. A log-write
    /// failure is reported in the [`AdvanceReport`] rather than as an
    /// error so the session stays usable.
    pub async fn advance_session(&mut self) -> AppResult<AdvanceReport> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| AppError::invalid_input("No active workout session."))?;

        let advancement = session.advance();

        let log_error = match &advancement.log {
            Some(request) => self
                .store
                .append_logged_set(self.user_id, request.clone())
                .await
                .err()
                .map(|e| {
                    warn!(user.id = %self.user_id, error = %e, "Failed to log set");
                    AppError::storage("Failed to log set. Data might not be saved.").with_source(e)
                }),
            None => None,
        };

        Ok(AdvanceReport {
            advancement,
            log_error,
        })
    }
}

/// Forward the three store subscriptions into a single event channel
///
/// Each subscription is pumped by its own task; snapshots from the three
/// streams interleave in arrival order. Tasks exit when the store drops
/// its channel or the event receiver goes away. Lagged receivers skip to
/// the most recent snapshot, which is safe because every message is a full
/// snapshot.
pub async fn pump_subscriptions(
    store: Arc<dyn UserStore>,
    user_id: Uuid,
    events: mpsc::Sender<StateEvent>,
) -> Vec<JoinHandle<()>> {
    let bank_rx = store.subscribe_bank(user_id).await;
    let routine_rx = store.subscribe_routine(user_id).await;
    let history_rx = store.subscribe_history(user_id).await;

    vec![
        tokio::spawn(forward(bank_rx, events.clone(), StateEvent::BankChanged)),
        tokio::spawn(forward(
            routine_rx,
            events.clone(),
            StateEvent::RoutineChanged,
        )),
        tokio::spawn(forward(history_rx, events, StateEvent::HistoryChanged)),
    ]
}

async fn forward<T: Clone + Send + 'static>(
    mut rx: broadcast::Receiver<T>,
    tx: mpsc::Sender<StateEvent>,
    wrap: fn(T) -> StateEvent,
) {
    loop {
        match rx.recv().await {
            Ok(snapshot) => {
                if tx.send(wrap(snapshot)).await.is_err() {
                    break;
                }
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                warn!(skipped, "Subscription lagged; skipping to latest snapshot");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
