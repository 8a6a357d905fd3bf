//! Centralized error handling.
//!
//! Settings resolution is total over absent variables (the default applies),
//! so the error surface is small: a variable that is present but unusable,
//! a required companion variable that is missing, or the production secret
//! key check.

use thiserror::Error;

/// Settings resolution error types
#[derive(Error, Debug)]
pub enum SettingsError {
    /// SECRET_KEY is mandatory when DEBUG is false.
    #[error("SECRET_KEY must be set when DEBUG is false")]
    MissingSecretKey,

    /// A variable required by an active configuration branch is absent.
    #[error("{key} must be set: {reason}")]
    MissingVar {
        key: &'static str,
        reason: &'static str,
    },

    /// A variable is set but its value cannot be interpreted.
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    /// An explicitly requested env file could not be read.
    #[error("failed to read env file")]
    EnvFile(#[from] dotenvy::Error),

    /// The resolved record could not be rendered for output.
    #[error("failed to render settings")]
    Render(#[from] serde_json::Error),
}

impl SettingsError {
    pub fn missing(key: &'static str, reason: &'static str) -> Self {
        SettingsError::MissingVar { key, reason }
    }

    pub fn invalid(key: &'static str, value: impl Into<String>, expected: &'static str) -> Self {
        SettingsError::InvalidValue {
            key,
            value: value.into(),
            expected,
        }
    }
}

/// Result type alias
pub type SettingsResult<T> = Result<T, SettingsError>;
