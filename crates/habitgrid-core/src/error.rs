//! Core error types for habitgrid-core.
//!
//! This module defines the error hierarchy using thiserror. Store-level
//! failures are usually absorbed (logged and degraded to an empty/default
//! value) before they reach a caller; validation errors are surfaced.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitgrid-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by a [`KeyValueStore`](crate::storage::KeyValueStore) backing.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Key cannot be mapped onto the backing
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// Failed to read a stored value
    #[error("Failed to read '{key}': {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a value
    #[error("Failed to write '{key}': {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Backing refused the write for lack of space
    #[error("Storage quota exceeded while writing '{0}'")]
    QuotaExceeded(String),

    /// Backing is not usable at all
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Data directory could not be determined or created
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Habit names must contain something other than whitespace
    #[error("Habit name must not be empty")]
    EmptyName,

    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: String,
        index: usize,
        len: usize,
    },

    /// Day outside the month being edited
    #[error("Day {day} is outside {month} (1-{days_in_month})")]
    DayOutOfRange {
        day: u32,
        month: String,
        days_in_month: u32,
    },

    /// Malformed month key
    #[error("Invalid month key '{0}': expected YEAR-MONTH with a 4-digit year and month 1-12")]
    InvalidMonthKey(String),
}
