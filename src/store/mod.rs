// ABOUTME: Document-store collaborator interface for per-user workout state
// ABOUTME: Bank and routine documents, append-only history, push-based subscriptions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! # Document Store Abstraction
//!
//! The backend holds three pieces of per-user state:
//!
//! - the exercise-bank document (`{ "exercises": [...] }`),
//! - the current routine document (raw serialized JSON text, persisted
//!   verbatim as returned by the generator),
//! - an append-only collection of logged sets with store-assigned
//!   timestamps, read in descending time order.
//!
//! Each piece also exposes a live subscription with push-on-change
//! semantics: a broadcast channel of full state snapshots. The three
//! subscriptions are independent streams; updates may arrive in any
//! relative order and each applies to its own slice of application state.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::bank::ExerciseBank;
use crate::errors::AppResult;
use crate::models::{LoggedSet, SetLogRequest};

/// Per-user document store collaborator
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load the user's exercise bank; a missing document is an empty bank
    async fn load_bank(&self, user_id: Uuid) -> AppResult<ExerciseBank>;

    /// Replace the user's exercise bank document
    async fn save_bank(&self, user_id: Uuid, bank: &ExerciseBank) -> AppResult<()>;

    /// Load the raw serialized routine text, if one has been generated
    async fn load_routine_text(&self, user_id: Uuid) -> AppResult<Option<String>>;

    /// Persist the raw serialized routine text verbatim
    async fn save_routine_text(&self, user_id: Uuid, text: &str) -> AppResult<()>;

    /// Append one logged set, assigning a monotonically non-decreasing
    /// server timestamp; returns the persisted record
    async fn append_logged_set(&self, user_id: Uuid, request: SetLogRequest)
        -> AppResult<LoggedSet>;

    /// Snapshot of the user's history, newest first
    async fn history(&self, user_id: Uuid) -> AppResult<Vec<LoggedSet>>;

    /// Subscribe to exercise-bank snapshots pushed on every change
    async fn subscribe_bank(&self, user_id: Uuid) -> broadcast::Receiver<ExerciseBank>;

    /// Subscribe to raw routine-text snapshots pushed on every change
    async fn subscribe_routine(&self, user_id: Uuid) -> broadcast::Receiver<String>;

    /// Subscribe to history snapshots (newest first) pushed on every append
    async fn subscribe_history(&self, user_id: Uuid) -> broadcast::Receiver<Vec<LoggedSet>>;
}
