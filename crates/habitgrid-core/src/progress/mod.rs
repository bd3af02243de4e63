//! Progress state machine.
//!
//! A habit's progress for one month is a sparse map from day-of-month to
//! [`DayStatus`]. Days that were never clicked have no entry. Derived metrics
//! (total score, success rate, current streak) are pure functions over that
//! map and live in [`metrics`].

mod metrics;
mod status;

pub use metrics::{current_streak, success_rate, total_score};
pub use status::DayStatus;

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Highest day-of-month any month can have. Stored keys above it are noise.
pub const MAX_DAY: u32 = 31;

/// Sparse day-of-month → status mapping. Never stores [`DayStatus::Unset`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Progress(BTreeMap<u32, DayStatus>);

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status for `day`; `Unset` when the day has no entry.
    pub fn get(&self, day: u32) -> DayStatus {
        self.0.get(&day).copied().unwrap_or_default()
    }

    /// Set `day` to `status`. Setting `Unset` removes the entry.
    pub fn set(&mut self, day: u32, status: DayStatus) {
        if status.is_set() {
            self.0.insert(day, status);
        } else {
            self.0.remove(&day);
        }
    }

    /// Apply one click to `day` and return the new status.
    pub fn toggle(&mut self, day: u32) -> DayStatus {
        let next = self.get(day).cycle();
        self.set(day, next);
        next
    }

    /// Number of days with an explicit status.
    pub fn tracked(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Explicitly set days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, DayStatus)> + '_ {
        self.0.iter().map(|(day, status)| (*day, *status))
    }

    /// Copy holding only the entries for days `1..=day_count`.
    pub fn within(&self, day_count: u32) -> Progress {
        self.iter().filter(|(day, _)| (1..=day_count).contains(day)).collect()
    }
}

/// Canonical decimal day key in `1..=MAX_DAY`: ASCII digits, no sign,
/// whitespace or leading zero.
fn parse_day_key(key: &str) -> Option<u32> {
    if key.is_empty() || key.starts_with('0') || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|day| *day <= MAX_DAY)
}

impl FromIterator<(u32, DayStatus)> for Progress {
    fn from_iter<I: IntoIterator<Item = (u32, DayStatus)>>(iter: I) -> Self {
        let mut progress = Progress::new();
        for (day, status) in iter {
            progress.set(day, status);
        }
        progress
    }
}

impl<'de> Deserialize<'de> for Progress {
    /// Lenient read: entries whose key is not a canonical day in `1..=31`, or
    /// whose value is not `true`/`"half"`/`false`, are dropped rather than
    /// failing the month.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| {
                let day = parse_day_key(&key)?;
                let status = DayStatus::from_json(&value)?;
                Some((day, status))
            })
            .collect())
    }
}
