// ABOUTME: Environment-driven configuration for the LLM provider and retry policy
// ABOUTME: Validated defaults with explicit errors for missing required settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! Application configuration loaded from environment variables.
//!
//! Environment-only configuration: no config files, every setting has a
//! validated default except the provider API key.

use std::env;
use std::time::Duration;

use crate::errors::{AppError, AppResult, ErrorCode};

/// Environment variable for the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the generation model
const MODEL_ENV: &str = "WORKOUT_PAL_MODEL";

/// Environment variable overriding the Generative Language API base URL
const BASE_URL_ENV: &str = "WORKOUT_PAL_LLM_BASE_URL";

/// Environment variable overriding the total routine-request attempt count
const MAX_ATTEMPTS_ENV: &str = "WORKOUT_PAL_ROUTINE_ATTEMPTS";

/// Environment variable overriding the base retry delay in milliseconds
const BASE_DELAY_ENV: &str = "WORKOUT_PAL_ROUTINE_BASE_DELAY_MS";

/// Default generation model
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default base URL for the Generative Language API
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text-generation provider configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API key for the Generative Language API
    pub api_key: String,
    /// Model used for routine generation
    pub model: String,
    /// API base URL (overridable for tests and proxies)
    pub base_url: String,
}

/// Retry policy for the routine-generation call
#[derive(Debug, Clone, Copy)]
pub struct RetryConfig {
    /// Total attempts, including the first (minimum 1)
    pub max_attempts: u32,
    /// Delay before attempt n (n >= 2) is `base_delay * 2^(n-2)`
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryConfig {
    /// Backoff delay applied after the given failed 1-based attempt
    #[must_use]
    pub fn delay_after(&self, failed_attempt: u32) -> Duration {
        let exponent = failed_attempt.saturating_sub(1).min(16);
        self.base_delay * 2_u32.pow(exponent)
    }
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Text-generation provider settings
    pub llm: LlmConfig,
    /// Routine-request retry policy
    pub retry: RetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or a numeric override
    /// fails to parse.
    pub fn from_env() -> AppResult<Self> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| {
            AppError::new(
                ErrorCode::ConfigMissing,
                format!("{API_KEY_ENV} environment variable not set"),
            )
        })?;

        let model = env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_owned());
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());

        let max_attempts = parse_env_u64(MAX_ATTEMPTS_ENV, 3)?;
        if max_attempts == 0 {
            return Err(AppError::config(format!(
                "{MAX_ATTEMPTS_ENV} must be at least 1"
            )));
        }
        let base_delay_ms = parse_env_u64(BASE_DELAY_ENV, 1000)?;

        Ok(Self {
            llm: LlmConfig {
                api_key,
                model,
                base_url,
            },
            retry: RetryConfig {
                max_attempts: u32::try_from(max_attempts)
                    .map_err(|_| AppError::config(format!("{MAX_ATTEMPTS_ENV} is too large")))?,
                base_delay: Duration::from_millis(base_delay_ms),
            },
        })
    }
}

fn parse_env_u64(var: &str, default: u64) -> AppResult<u64> {
    match env::var(var) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| AppError::config(format!("{var} must be a number: {e}"))),
        Err(_) => Ok(default),
    }
}
