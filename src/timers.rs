// ABOUTME: Stopwatch and rest-timer ticking primitives with an async countdown driver
// ABOUTME: One-second ticks, single-shot end signal, and teardown without leaked intervals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! # Stopwatch and Rest Timer
//!
//! Both timers are plain per-second tick structures owned by a single
//! control flow; an embedding event loop (or the async driver below)
//! advances them once per second. Stopwatch and rest-timer ticks are
//! independent and never synchronized with each other or with network
//! completions.
//!
//! [`start_rest_countdown`] drives a [`RestTimer`] on a tokio interval,
//! forwards tick events on a channel, signals the end exactly once per
//! activation, and tears the interval down on end or explicit stop so no
//! periodic callback leaks past the timer's lifetime.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

/// Preset rest durations in seconds offered to the user
pub const REST_PRESETS: [u64; 3] = [30, 60, 90];

/// Count-up stopwatch ticking once per second while running
///
/// Pause freezes the displayed value, reset zeroes it. Elapsed time is a
/// monotonic non-negative integer second count with no upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopwatch {
    elapsed_secs: u64,
    running: bool,
}

impl Stopwatch {
    /// Create a stopped stopwatch at zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elapsed_secs: 0,
            running: false,
        }
    }

    /// Start or resume counting
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Pause, freezing the displayed value
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stop and zero the elapsed time
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_secs = 0;
    }

    /// Advance one second if running
    pub fn tick(&mut self) {
        if self.running {
            self.elapsed_secs += 1;
        }
    }

    /// Whether the stopwatch is counting
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed whole seconds
    #[must_use]
    pub const fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Format as `HH:MM:SS`
    #[must_use]
    pub fn format(&self) -> String {
        let hours = self.elapsed_secs / 3600;
        let minutes = (self.elapsed_secs % 3600) / 60;
        let seconds = self.elapsed_secs % 60;
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Observation from one rest-timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestTick {
    /// Timer is not running
    Idle,
    /// Timer counted down to the given remaining seconds
    Running(u64),
    /// Timer reached zero on this tick; emitted exactly once per activation
    Ended,
}

/// Count-down rest timer started from a caller-chosen preset
///
/// On reaching zero while running it stops itself and reports
/// [`RestTick::Ended`] exactly once. It may be stopped early, which resets
/// the remaining time to zero. No negative value is ever observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestTimer {
    remaining_secs: u64,
    running: bool,
}

impl RestTimer {
    /// Create an idle rest timer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remaining_secs: 0,
            running: false,
        }
    }

    /// Start counting down from the given number of seconds
    pub fn start(&mut self, seconds: u64) {
        self.remaining_secs = seconds;
        self.running = true;
    }

    /// Stop early, resetting to zero
    pub fn stop(&mut self) {
        self.running = false;
        self.remaining_secs = 0;
    }

    /// Advance one second if running
    pub fn tick(&mut self) -> RestTick {
        if !self.running {
            return RestTick::Idle;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.running = false;
            return RestTick::Ended;
        }
        RestTick::Running(self.remaining_secs)
    }

    /// Whether the timer is counting down
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining whole seconds
    #[must_use]
    pub const fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    /// Format as `MM:SS`
    #[must_use]
    pub fn format(&self) -> String {
        let minutes = self.remaining_secs / 60;
        let seconds = self.remaining_secs % 60;
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Event published by the async rest-timer driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed; remaining seconds attached
    Tick(u64),
    /// The countdown reached zero; sent at most once per activation
    Ended,
}

/// Handle to a running rest countdown
#[derive(Debug)]
pub struct RestCountdown {
    /// Tick and end events, one per elapsed second
    pub events: mpsc::Receiver<TimerEvent>,
    stop: watch::Sender<bool>,
}

impl RestCountdown {
    /// Cancel the countdown early; the driver task exits without sending
    /// [`TimerEvent::Ended`]
    pub fn stop(&self) {
        // Receiver side may already be gone when the countdown ended
        let _ = self.stop.send(true);
    }
}

/// Spawn a rest countdown ticking once per second
///
/// The driver task exits when the countdown ends, when [`RestCountdown::stop`]
/// is called, or when the handle (and its event receiver) is dropped.
#[must_use]
pub fn start_rest_countdown(seconds: u64) -> RestCountdown {
    let (events_tx, events_rx) = mpsc::channel(16);
    let (stop_tx, mut stop_rx) = watch::channel(false);

    tokio::spawn(async move {
        let mut timer = RestTimer::new();
        timer.start(seconds);

        let period = Duration::from_secs(1);
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let event = match timer.tick() {
                        RestTick::Running(remaining) => TimerEvent::Tick(remaining),
                        RestTick::Ended => TimerEvent::Ended,
                        RestTick::Idle => break,
                    };
                    let ended = event == TimerEvent::Ended;
                    if events_tx.send(event).await.is_err() {
                        // Receiver dropped; tear the interval down
                        break;
                    }
                    if ended {
                        break;
                    }
                }
                changed = stop_rx.changed() => {
                    if changed.is_err() || *stop_rx.borrow() {
                        debug!(remaining = timer.remaining_secs(), "Rest countdown cancelled");
                        break;
                    }
                }
            }
        }
    });

    RestCountdown {
        events: events_rx,
        stop: stop_tx,
    }
}
