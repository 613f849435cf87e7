// ABOUTME: Home workout companion library: exercise bank, generated routines, guided sessions
// ABOUTME: Crate root wiring the data model, store, LLM provider, and session modules together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! # Workout Pal
//!
//! A home workout companion built around three cooperating pieces:
//!
//! - An **exercise bank** the user curates from a built-in catalog
//! - A **routine generator** that asks a text-generation provider for a
//!   structured weekly plan, retrying with exponential backoff
//! - A **guided session** that walks the plan step by step, logging one
//!   completed set per advance
//!
//! Logged history, the bank, and the routine document live behind the
//! [`store::UserStore`] trait; [`store::MemoryStore`] implements it
//! in-process with push subscriptions. [`llm::TextGenerator`] abstracts
//! the model provider; [`llm::GeminiProvider`] talks to the Generative
//! Language API. [`app::WorkoutApp`] ties it all together for one user.

pub mod app;
pub mod bank;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod generator;
pub mod journal;
pub mod llm;
pub mod logging;
pub mod models;
pub mod session;
pub mod store;
pub mod timers;

pub use app::{AppState, StateEvent, WorkoutApp};
pub use bank::{BankChange, ExerciseBank};
pub use errors::{AppError, AppResult, ErrorCode};
pub use generator::RoutineGenerator;
pub use models::{LoggedSet, RepCount, Routine, RoutineStep, StepKind, Weekday};
pub use session::{AdvanceOutcome, GuidedSession};
