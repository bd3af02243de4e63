//! Editing session over one month's habits.
//!
//! A [`Tracker`] owns a [`HabitStore`] and the habit list of the month being
//! viewed. Every mutation recomputes the affected metrics and writes the whole
//! list back to the store. Loading a month heals stale cached metrics and
//! persists the healed list when anything changed.
//!
//! ## Flow
//!
//! ```text
//! store.get(month) -> recompute -> toggle_day / add / edit / remove -> store.put(month)
//! ```

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::ValidationError;
use crate::habit::Habit;
use crate::month::MonthKey;
use crate::progress::DayStatus;
use crate::stats::{self, HabitSummary, MonthOverview};
use crate::storage::{HabitStore, KeyValueStore};

/// Habit list of the active month, backed by a [`HabitStore`].
#[derive(Debug)]
pub struct Tracker<S> {
    store: HabitStore<S>,
    month: MonthKey,
    habits: Vec<Habit>,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load `month` from `store`.
    pub fn open(store: HabitStore<S>, month: MonthKey) -> Self {
        let mut tracker = Self {
            store,
            month,
            habits: Vec::new(),
        };
        tracker.load();
        tracker
    }

    fn load(&mut self) {
        let stored = self.store.get(self.month);
        let day_count = self.month.days_in_month();
        let healed: Vec<Habit> = stored
            .iter()
            .cloned()
            .map(|habit| habit.recomputed(day_count))
            .collect();
        if healed != stored {
            debug!(month = %self.month, "recomputed stale habit metrics");
            self.store.put(self.month, &healed);
        }
        self.habits = healed;
    }

    fn save(&mut self) -> bool {
        let saved = self.store.put(self.month, &self.habits);
        if !saved {
            warn!(month = %self.month, "changes kept in memory only");
        }
        saved
    }

    /// Make `month` the active month and load its habits.
    pub fn switch_month(&mut self, month: MonthKey) {
        self.month = month;
        self.load();
    }

    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn store(&self) -> &HabitStore<S> {
        &self.store
    }

    pub fn into_store(self) -> HabitStore<S> {
        self.store
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.habits.len() {
            return Err(ValidationError::OutOfBounds {
                collection: format!("habits of {}", self.month),
                index,
                len: self.habits.len(),
            });
        }
        Ok(())
    }

    fn check_name(name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }

    /// Append a habit with no tracked days and return its index.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyName`] for a blank name.
    pub fn add_habit(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<usize, ValidationError> {
        let name = name.into();
        Self::check_name(&name)?;
        self.habits.push(Habit::new(name, description));
        self.save();
        info!(month = %self.month, index = self.habits.len() - 1, "added habit");
        Ok(self.habits.len() - 1)
    }

    /// Rename and re-describe the habit at `index`; progress is kept.
    ///
    /// # Errors
    /// Returns an error for a bad index or a blank name.
    pub fn edit_habit(
        &mut self,
        index: usize,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.check_index(index)?;
        let name = name.into();
        Self::check_name(&name)?;
        let habit = &mut self.habits[index];
        habit.name = name;
        habit.description = description.into();
        self.save();
        Ok(())
    }

    /// Remove the habit at `index`. Later habits move up one row.
    ///
    /// # Errors
    /// Returns [`ValidationError::OutOfBounds`] for a bad index.
    pub fn remove_habit(&mut self, index: usize) -> Result<Habit, ValidationError> {
        self.check_index(index)?;
        let removed = self.habits.remove(index);
        self.save();
        info!(month = %self.month, index, "removed habit");
        Ok(removed)
    }

    /// Apply one click to `day` of the habit at `index` and return the new
    /// status.
    ///
    /// # Errors
    /// Returns an error for a bad index or a day outside the active month.
    pub fn toggle_day(&mut self, index: usize, day: u32) -> Result<DayStatus, ValidationError> {
        self.check_index(index)?;
        if !self.month.contains_day(day) {
            return Err(ValidationError::DayOutOfRange {
                day,
                month: self.month.to_string(),
                days_in_month: self.month.days_in_month(),
            });
        }
        let habit = &mut self.habits[index];
        let status = habit.progress.toggle(day);
        habit.recompute(self.month.days_in_month());
        self.save();
        debug!(month = %self.month, index, day, %status, "toggled day");
        Ok(status)
    }

    /// Seed an empty active month from the previous month.
    ///
    /// Does nothing and returns `false` when the active month already has
    /// habits.
    pub fn copy_from_previous_month(&mut self) -> bool {
        if !self.habits.is_empty() {
            return false;
        }
        let copied = self.store.copy_forward(self.month, self.month.previous());
        let copied_any = !copied.is_empty();
        self.habits = copied;
        copied_any
    }

    pub fn summaries(&self) -> Vec<HabitSummary> {
        stats::summarize(self.month, &self.habits)
    }

    /// Month overview with the recent window ending at `today`'s day of
    /// month, placed in the active month.
    pub fn overview(&self, today: NaiveDate, window_days: u32) -> MonthOverview {
        MonthOverview::compute(
            self.month,
            &self.habits,
            self.month.reference_date(today),
            window_days,
        )
    }
}
