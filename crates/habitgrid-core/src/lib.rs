//! # Habitgrid Core Library
//!
//! This library provides the core logic for Habitgrid, a monthly habit
//! tracker. All operations are available through the `habitgrid` CLI binary,
//! which is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Progress**: per-day status cycling and the metrics derived from a
//!   month of statuses (total score, success rate, current streak)
//! - **Storage**: month-scoped habit lists over an injected key-value store,
//!   with copy-forward between months, plus TOML configuration
//! - **Tracker**: an editing session over one month that keeps cached
//!   metrics and storage in step
//! - **Stats**: month overview figures
//!
//! ## Key Components
//!
//! - [`DayStatus`]: the four-state day value and its transition
//! - [`HabitStore`]: month-keyed persistence
//! - [`Tracker`]: add / edit / remove / toggle workflow
//! - [`Config`]: application configuration management

pub mod error;
pub mod habit;
pub mod month;
pub mod progress;
pub mod stats;
pub mod storage;
pub mod tracker;

pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use habit::Habit;
pub use month::MonthKey;
pub use progress::{current_streak, success_rate, total_score, DayStatus, Progress};
pub use stats::{HabitSummary, MonthOverview};
pub use storage::{Config, FileStore, HabitStore, KeyValueStore, MemoryStore};
pub use tracker::Tracker;
