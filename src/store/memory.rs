// ABOUTME: In-memory UserStore implementation with broadcast-backed subscriptions
// ABOUTME: Backs the application driver and tests without an external backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use tokio::sync::{broadcast, RwLock};
use tracing::debug;
use uuid::Uuid;

use super::UserStore;
use crate::bank::ExerciseBank;
use crate::errors::AppResult;
use crate::models::{LoggedSet, SetLogRequest};

/// Buffered snapshots per subscription channel
const CHANNEL_CAPACITY: usize = 32;

#[derive(Default)]
struct UserDocs {
    bank: ExerciseBank,
    routine_text: Option<String>,
    history: Vec<LoggedSet>,
    last_timestamp: Option<DateTime<Utc>>,
}

struct UserChannels {
    bank: broadcast::Sender<ExerciseBank>,
    routine: broadcast::Sender<String>,
    history: broadcast::Sender<Vec<LoggedSet>>,
}

impl Default for UserChannels {
    fn default() -> Self {
        Self {
            bank: broadcast::channel(CHANNEL_CAPACITY).0,
            routine: broadcast::channel(CHANNEL_CAPACITY).0,
            history: broadcast::channel(CHANNEL_CAPACITY).0,
        }
    }
}

/// In-memory document store keyed by user id
///
/// Timestamps assigned on append are monotonically non-decreasing per
/// user even when wall-clock time stalls, matching the server-assigned
/// ordering the history view depends on.
#[derive(Clone, Default)]
pub struct MemoryStore {
    docs: Arc<RwLock<HashMap<Uuid, UserDocs>>>,
    channels: Arc<RwLock<HashMap<Uuid, UserChannels>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    async fn channels_for(&self, user_id: Uuid) -> (
        broadcast::Sender<ExerciseBank>,
        broadcast::Sender<String>,
        broadcast::Sender<Vec<LoggedSet>>,
    ) {
        let mut channels = self.channels.write().await;
        let entry = channels.entry(user_id).or_default();
        (
            entry.bank.clone(),
            entry.routine.clone(),
            entry.history.clone(),
        )
    }

    fn next_timestamp(docs: &mut UserDocs) -> DateTime<Utc> {
        let now = Utc::now();
        let assigned = match docs.last_timestamp {
            Some(last) if now <= last => last + ChronoDuration::milliseconds(1),
            _ => now,
        };
        docs.last_timestamp = Some(assigned);
        assigned
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn load_bank(&self, user_id: Uuid) -> AppResult<ExerciseBank> {
        let docs = self.docs.read().await;
        Ok(docs
            .get(&user_id)
            .map(|user| user.bank.clone())
            .unwrap_or_default())
    }

    async fn save_bank(&self, user_id: Uuid, bank: &ExerciseBank) -> AppResult<()> {
        {
            let mut docs = self.docs.write().await;
            docs.entry(user_id).or_default().bank = bank.clone();
        }
        let (bank_tx, _, _) = self.channels_for(user_id).await;
        // No subscribers is fine; the snapshot is simply dropped
        let _ = bank_tx.send(bank.clone());
        debug!(user.id = %user_id, exercises = bank.len(), "Saved exercise bank");
        Ok(())
    }

    async fn load_routine_text(&self, user_id: Uuid) -> AppResult<Option<String>> {
        let docs = self.docs.read().await;
        Ok(docs.get(&user_id).and_then(|user| user.routine_text.clone()))
    }

    async fn save_routine_text(&self, user_id: Uuid, text: &str) -> AppResult<()> {
        {
            let mut docs = self.docs.write().await;
            docs.entry(user_id).or_default().routine_text = Some(text.to_owned());
        }
        let (_, routine_tx, _) = self.channels_for(user_id).await;
        let _ = routine_tx.send(text.to_owned());
        debug!(user.id = %user_id, bytes = text.len(), "Saved routine document");
        Ok(())
    }

    async fn append_logged_set(
        &self,
        user_id: Uuid,
        request: SetLogRequest,
    ) -> AppResult<LoggedSet> {
        let (record, snapshot) = {
            let mut docs = self.docs.write().await;
            let user = docs.entry(user_id).or_default();
            let recorded_at = Self::next_timestamp(user);
            let record = LoggedSet::from_request(request, recorded_at);
            // Newest first keeps reads allocation-free
            user.history.insert(0, record.clone());
            (record, user.history.clone())
        };
        let (_, _, history_tx) = self.channels_for(user_id).await;
        let _ = history_tx.send(snapshot);
        debug!(
            user.id = %user_id,
            exercise = %record.exercise_name,
            "Appended logged set"
        );
        Ok(record)
    }

    async fn history(&self, user_id: Uuid) -> AppResult<Vec<LoggedSet>> {
        let docs = self.docs.read().await;
        Ok(docs
            .get(&user_id)
            .map(|user| user.history.clone())
            .unwrap_or_default())
    }

    async fn subscribe_bank(&self, user_id: Uuid) -> broadcast::Receiver<ExerciseBank> {
        self.channels_for(user_id).await.0.subscribe()
    }

    async fn subscribe_routine(&self, user_id: Uuid) -> broadcast::Receiver<String> {
        self.channels_for(user_id).await.1.subscribe()
    }

    async fn subscribe_history(&self, user_id: Uuid) -> broadcast::Receiver<Vec<LoggedSet>> {
        self.channels_for(user_id).await.2.subscribe()
    }
}
