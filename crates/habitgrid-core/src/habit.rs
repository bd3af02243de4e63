//! Habit records as they are persisted per month.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::progress::{self, Progress};

/// One tracked goal within a specific month.
///
/// `longest_streak` and `success_rate` are caches of metrics derived from
/// `progress`; call [`Habit::recompute`] after touching `progress`. They are
/// read leniently since a recompute overwrites them anyway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub progress: Progress,
    /// Total score (cumulative credit), not a consecutive run.
    #[serde(default, deserialize_with = "lenient_score")]
    pub longest_streak: f64,
    #[serde(default, deserialize_with = "lenient_rate")]
    pub success_rate: u32,
}

impl Habit {
    /// A habit with no tracked days.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            progress: Progress::new(),
            longest_streak: 0.0,
            success_rate: 0,
        }
    }

    /// Refresh the cached metrics from the days `1..=day_count` of
    /// `progress`. Entries past the end of the month are left in place but
    /// not counted.
    pub fn recompute(&mut self, day_count: u32) {
        let in_month = self.progress.within(day_count);
        self.longest_streak = progress::total_score(&in_month);
        self.success_rate = progress::success_rate(&in_month);
    }

    /// Copy of this habit with recomputed metrics.
    pub fn recomputed(mut self, day_count: u32) -> Self {
        self.recompute(day_count);
        self
    }

    /// Name and description only, with progress and metrics reset.
    pub fn carried_forward(&self) -> Self {
        Self::new(self.name.clone(), self.description.clone())
    }

    pub fn current_streak(&self, day_count: u32) -> f64 {
        progress::current_streak(&self.progress, day_count)
    }
}

/// Any finite non-negative number, else 0.
fn lenient_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite() && *n >= 0.0)
        .unwrap_or(0.0))
}

/// Any number rounded and clamped to a percentage, else 0.
fn lenient_rate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
        .map(|n| n.round().clamp(0.0, 100.0) as u32)
        .unwrap_or(0))
}
