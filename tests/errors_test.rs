// ABOUTME: Tests for the unified error type and error-code classification
// ABOUTME: Covers constructors, display format, chaining, and retry classes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Home Workout Pal

use std::error::Error;

use workout_pal::errors::{AppError, ErrorCode};

#[test]
fn test_error_display_includes_code_and_message() {
    let err = AppError::invalid_input("bad value");
    assert_eq!(err.to_string(), "[InvalidInput] bad value");
}

#[test]
fn test_constructors_assign_expected_codes() {
    assert_eq!(AppError::invalid_input("x").code, ErrorCode::InvalidInput);
    assert_eq!(
        AppError::missing_field("reps").code,
        ErrorCode::MissingRequiredField
    );
    assert_eq!(AppError::out_of_range("x").code, ErrorCode::ValueOutOfRange);
    assert_eq!(AppError::not_found("x").code, ErrorCode::ResourceNotFound);
    assert_eq!(
        AppError::external_service("x").code,
        ErrorCode::ExternalServiceError
    );
    assert_eq!(
        AppError::rate_limited("x").code,
        ErrorCode::ExternalRateLimited
    );
    assert_eq!(AppError::config("x").code, ErrorCode::ConfigError);
    assert_eq!(AppError::storage("x").code, ErrorCode::StorageError);
    assert_eq!(
        AppError::serialization("x").code,
        ErrorCode::SerializationError
    );
    assert_eq!(AppError::internal("x").code, ErrorCode::InternalError);
}

#[test]
fn test_missing_field_names_the_field() {
    let err = AppError::missing_field("exercise name");
    assert!(err.message.contains("'exercise name'"));
}

#[test]
fn test_validation_classification() {
    assert!(AppError::invalid_input("x").is_validation());
    assert!(AppError::missing_field("x").is_validation());
    assert!(AppError::out_of_range("x").is_validation());
    assert!(!AppError::storage("x").is_validation());
    assert!(!AppError::external_service("x").is_validation());
}

#[test]
fn test_retryable_classification() {
    assert!(AppError::external_service("x").is_retryable());
    assert!(AppError::rate_limited("x").is_retryable());
    assert!(!AppError::invalid_input("x").is_retryable());
    assert!(!AppError::storage("x").is_retryable());
    assert!(!AppError::config("x").is_retryable());
}

#[test]
fn test_with_source_chains() {
    let inner = AppError::external_service("timeout");
    let outer = AppError::external_service("gave up").with_source(inner);
    let source = outer.source().unwrap();
    assert!(source.to_string().contains("timeout"));
}

#[test]
fn test_json_error_converts_to_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: AppError = json_err.into();
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert!(err.source().is_some());
}

#[test]
fn test_error_code_serde_names() {
    assert_eq!(
        serde_json::to_string(&ErrorCode::InvalidInput).unwrap(),
        "\"INVALID_INPUT\""
    );
    let code: ErrorCode = serde_json::from_str("\"STORAGE_ERROR\"").unwrap();
    assert_eq!(code, ErrorCode::StorageError);
}

#[test]
fn test_error_code_descriptions_are_stable() {
    assert_eq!(
        ErrorCode::InvalidInput.description(),
        "The provided input is invalid"
    );
    assert_eq!(
        ErrorCode::StorageError.description(),
        "Storage operation failed"
    );
}
