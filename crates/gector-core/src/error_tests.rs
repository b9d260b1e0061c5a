//! Tests for `error` module

use super::config::ConfigError;
use super::error::*;

#[test]
fn test_error_codes_are_unique() {
    // Arrange
    let errors: Vec<Error> = vec![
        Error::NotFound("a".into()),
        Error::AlreadyExists("a".into()),
        Error::Config("bad".into()),
    ];

    // Act
    let codes: Vec<&str> = errors.iter().map(Error::code).collect();

    // Assert
    let mut unique_codes = codes.clone();
    unique_codes.sort_unstable();
    unique_codes.dedup();
    assert_eq!(codes.len(), unique_codes.len(), "Error codes must be unique");

    for code in &codes {
        assert!(
            code.starts_with("GECTOR-"),
            "Code {code} should start with GECTOR-"
        );
    }
}

#[test]
fn test_not_found_message() {
    let err = Error::NotFound("vec-1".into());

    assert_eq!(err.to_string(), "vector with id vec-1 not found");
    assert_eq!(err.code(), "GECTOR-001");
}

#[test]
fn test_already_exists_message() {
    let err = Error::AlreadyExists("vec-7".into());

    assert!(err.to_string().contains("vec-7"));
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn test_config_error_converts() {
    // Arrange
    let config_err = ConfigError::InvalidValue {
        key: "index.promotion_probability".to_string(),
        message: "value 2 is out of range [0, 1]".to_string(),
    };

    // Act
    let err: Error = config_err.into();

    // Assert
    assert_eq!(err.code(), "GECTOR-003");
    assert!(err.to_string().contains("index.promotion_probability"));
}

#[test]
fn test_is_recoverable() {
    assert!(Error::NotFound("x".into()).is_recoverable());
    assert!(Error::AlreadyExists("x".into()).is_recoverable());
    assert!(!Error::Config("x".into()).is_recoverable());
}
