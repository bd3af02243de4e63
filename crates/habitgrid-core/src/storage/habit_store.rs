//! Month-scoped habit persistence.
//!
//! Each month's habits are stored as one JSON array under
//! `habits-{year}-{month}`. A month is either absent (read as empty) or
//! present. Nothing here returns an error: read failures and malformed JSON
//! degrade to an absent month, write failures to `false`.
//!
//! # Usage
//! ```rust,ignore
//! let mut store = HabitStore::new(MemoryStore::new());
//! let month: MonthKey = "2025-6".parse()?;
//! let habits = store.copy_forward(month, month.previous());
//! assert!(store.put(month, &habits));
//! ```

use tracing::{debug, warn};

use super::kv::KeyValueStore;
use crate::habit::Habit;
use crate::month::MonthKey;

/// Month that ships with built-in habits while nothing is stored for it.
pub const SEED_MONTH: MonthKey = MonthKey::seed();

/// Name used when copy-forward finds nothing to copy.
pub const DEFAULT_PLACEHOLDER_NAME: &str = "New Habit";

fn seed_habits() -> Vec<Habit> {
    vec![
        Habit::new("Practice German", "(Class, Video, assignment, speaking)"),
        Habit::new("No Sugar in May", "(Bueno, Juice, Biscuit, Drinks)"),
    ]
}

/// Habit lists keyed by month over an injected [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct HabitStore<S> {
    backend: S,
    placeholder_name: String,
    placeholder_description: String,
}

impl<S: KeyValueStore> HabitStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
            placeholder_description: String::new(),
        }
    }

    /// Set the habit produced when copy-forward has no source habits.
    pub fn with_placeholder(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.placeholder_name = name.into();
        self.placeholder_description = description.into();
        self
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn load(&self, month: MonthKey) -> Option<Vec<Habit>> {
        let key = month.storage_key();
        let raw = match self.backend.read(&key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(%month, error = %e, "failed to read habits; treating month as empty");
                return None;
            }
        };
        match serde_json::from_str::<Vec<Habit>>(&raw) {
            Ok(habits) => Some(habits),
            Err(e) => {
                warn!(%month, error = %e, "stored habits are malformed; treating month as empty");
                None
            }
        }
    }

    /// Habits stored for `month`, in display order.
    ///
    /// An absent month is empty, except [`SEED_MONTH`] which yields the two
    /// built-in habits until something is written for it. Cached metrics are
    /// returned as stored.
    pub fn get(&self, month: MonthKey) -> Vec<Habit> {
        match self.load(month) {
            Some(habits) => {
                debug!(%month, count = habits.len(), "loaded habits");
                habits
            }
            None if month == SEED_MONTH => seed_habits(),
            None => Vec::new(),
        }
    }

    /// Replace the whole habit list for `month`. Returns `false` if the
    /// backing refused the write.
    pub fn put(&mut self, month: MonthKey, habits: &[Habit]) -> bool {
        let json = match serde_json::to_string(habits) {
            Ok(json) => json,
            Err(e) => {
                warn!(%month, error = %e, "failed to serialize habits");
                return false;
            }
        };
        match self.backend.write(&month.storage_key(), &json) {
            Ok(()) => {
                debug!(%month, count = habits.len(), "saved habits");
                true
            }
            Err(e) => {
                warn!(%month, error = %e, "failed to save habits");
                false
            }
        }
    }

    /// Seed `target` with the names and descriptions of `source`'s habits,
    /// progress cleared.
    ///
    /// Falls back to one placeholder habit when `source` has none. The result
    /// is written to `target` unconditionally, replacing whatever it held;
    /// callers that must not clobber a populated month check first.
    pub fn copy_forward(&mut self, target: MonthKey, source: MonthKey) -> Vec<Habit> {
        let mut habits: Vec<Habit> = self
            .get(source)
            .iter()
            .map(Habit::carried_forward)
            .collect();
        if habits.is_empty() {
            habits.push(Habit::new(
                self.placeholder_name.clone(),
                self.placeholder_description.clone(),
            ));
        }
        debug!(%target, %source, count = habits.len(), "copying habits forward");
        self.put(target, &habits);
        habits
    }
}
