//! Error types for `gector`.
//!
//! The index engine reports a single failure kind in normal operation
//! (updating an absent ID). The remaining variants belong to the strict
//! insertion path and to configuration loading.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for `gector` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in `gector` operations.
///
/// Error codes follow the pattern `GECTOR-XXX` for easy debugging.
#[derive(Error, Debug)]
pub enum Error {
    /// Vector not found (GECTOR-001).
    #[error("vector with id {0} not found")]
    NotFound(String),

    /// Vector already present (GECTOR-002).
    ///
    /// Only returned by [`crate::HnswIndex::try_add_vector`].
    #[error("vector with id {0} already exists")]
    AlreadyExists(String),

    /// Configuration error (GECTOR-003).
    #[error("[GECTOR-003] Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns the error code (e.g., "GECTOR-001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "GECTOR-001",
            Self::AlreadyExists(_) => "GECTOR-002",
            Self::Config(_) => "GECTOR-003",
        }
    }

    /// Returns true if the caller can act on this error and retry.
    ///
    /// Configuration errors need a fixed config file or environment.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
