// ABOUTME: Text-generation collaborator abstraction for structured JSON output
// ABOUTME: Defines the provider contract the routine generator calls through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

//! # Text-Generation Provider Interface
//!
//! The routine generator talks to its language model through
//! [`TextGenerator`], a small async trait: one prompt in, opaque response
//! text out. The response is treated as text requiring local JSON parsing;
//! providers may attach a machine-checkable response schema so the model is
//! constrained to the expected shape, but parsing and validation always
//! happen on our side.

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppResult;

/// A structured text-generation request
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// The prompt text
    pub prompt: String,
    /// Model override; provider default when `None`
    pub model: Option<String>,
    /// JSON Schema constraining the response shape, when supported
    pub response_schema: Option<Value>,
    /// Temperature for response randomness
    pub temperature: Option<f32>,
}

impl GenerateRequest {
    /// Create a request with just a prompt
    #[must_use]
    pub const fn new(prompt: String) -> Self {
        Self {
            prompt,
            model: None,
            response_schema: None,
            temperature: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Attach a JSON response schema
    #[must_use]
    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Text-generation provider contract
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Unique provider identifier (e.g. "gemini")
    fn name(&self) -> &'static str;

    /// Default model used when a request does not name one
    fn default_model(&self) -> &str;

    /// Generate a completion, returning the raw response text
    async fn generate(&self, request: &GenerateRequest) -> AppResult<String>;

    /// Check that the provider is reachable and the API key is valid
    async fn health_check(&self) -> AppResult<bool>;
}
