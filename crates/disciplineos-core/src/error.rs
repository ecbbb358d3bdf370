//! Core error types for disciplineos-core.
//!
//! This module defines the error hierarchy using thiserror. Every error is
//! recoverable at the call site and surfaced as a user-facing message; none
//! is fatal to the process.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for disciplineos-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Tracker state-machine errors
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// Persistence errors
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Action rejected by the session throttle
    #[error(transparent)]
    Throttled(#[from] Throttle),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors produced by the check-in streak engine.
///
/// These map one-to-one onto the user-facing rejection messages; the record
/// is never modified when one of them is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Candidate text is blank after normalization
    #[error("Type your statement before submitting.")]
    EmptyInput,

    /// Check-in text does not reproduce the locked commitment
    #[error("This doesn't match your saved statement exactly. Use save to update it first.")]
    CommitmentMismatch,

    /// Starting-day value outside the allowed bounds
    #[error("Enter a valid day (0-{max}).")]
    OutOfRange { value: u32, max: u32 },

    /// Starting day has been latched by a check-in or an explicit lock
    #[error("The starting day is locked. Reset the streak to change it.")]
    StartingDayLocked,

    /// Operation not available for this tracker variant
    #[error("This tracker does not support '{0}'.")]
    UnsupportedAction(&'static str),
}

/// Persistence-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing store refused the write; in-memory state is unchanged
    #[error("Could not save. Storage is blocked.")]
    WriteBlocked {
        key: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Data directory could not be determined or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),

    /// Record could not be serialized for storage
    #[error("Failed to encode record for '{key}': {message}")]
    Encode { key: String, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Cooperative throttle rejections from the action guard.
///
/// These are UI-level rate limits, not engine errors; the wording matches
/// what the user sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throttle {
    /// A second action arrived inside the minimum inter-action interval
    #[error("Slow down — one action at a time.")]
    TooSoon,

    /// The previous action has not finished yet
    #[error("Please wait — finishing the previous action.")]
    Busy,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
