//! Month overview statistics.
//!
//! Aggregates across every habit of one month: overall success rate, the
//! highest total score ("most check marks"), and how many habits were checked
//! off recently. Per-row figures are produced by [`summarize`].

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::habit::Habit;
use crate::month::MonthKey;
use crate::progress::{self, DayStatus};

/// Headline figures for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthOverview {
    pub month: MonthKey,
    /// Credit earned over tracked days across all habits, 0-100.
    pub success_rate: u32,
    /// Highest cached total score of any habit.
    pub most_check_marks: f64,
    /// Habits with a complete day inside the recent window.
    pub recently_active: usize,
    pub habit_count: usize,
}

impl MonthOverview {
    /// Compute the overview for `habits` of `month`.
    ///
    /// The recent window is the `window_days` days ending at `reference`;
    /// days of the window that fall outside `month` are skipped. Progress
    /// entries past the end of `month` do not count toward the success rate.
    pub fn compute(month: MonthKey, habits: &[Habit], reference: NaiveDate, window_days: u32) -> Self {
        let day_count = month.days_in_month();
        let (earned, tracked) = habits.iter().fold((0.0, 0usize), |(earned, tracked), habit| {
            let in_month = habit.progress.within(day_count);
            (
                earned + progress::total_score(&in_month),
                tracked + in_month.tracked(),
            )
        });
        let success_rate = if tracked == 0 {
            0
        } else {
            (100.0 * earned / tracked as f64).round() as u32
        };

        let most_check_marks = habits
            .iter()
            .map(|h| h.longest_streak)
            .fold(0.0, f64::max);

        let recent_days = recent_days(month, reference, window_days);
        let recently_active = habits
            .iter()
            .filter(|habit| {
                recent_days
                    .iter()
                    .any(|day| habit.progress.get(*day) == DayStatus::Complete)
            })
            .count();

        Self {
            month,
            success_rate,
            most_check_marks,
            recently_active,
            habit_count: habits.len(),
        }
    }
}

fn recent_days(month: MonthKey, reference: NaiveDate, window_days: u32) -> Vec<u32> {
    (0..i64::from(window_days))
        .filter_map(|offset| reference.checked_sub_signed(Duration::days(offset)))
        .filter(|date| MonthKey::from_date(*date) == month)
        .map(|date| date.day())
        .collect()
}

/// Per-habit figures shown alongside each grid row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitSummary {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub total_score: f64,
    pub success_rate: u32,
    pub current_streak: f64,
    pub tracked_days: usize,
}

/// Summaries for every habit of `month`, in display order.
pub fn summarize(month: MonthKey, habits: &[Habit]) -> Vec<HabitSummary> {
    let day_count = month.days_in_month();
    habits
        .iter()
        .enumerate()
        .map(|(index, habit)| {
            let in_month = habit.progress.within(day_count);
            HabitSummary {
                index,
                name: habit.name.clone(),
                description: habit.description.clone(),
                total_score: progress::total_score(&in_month),
                success_rate: progress::success_rate(&in_month),
                current_streak: habit.current_streak(day_count),
                tracked_days: in_month.tracked(),
            }
        })
        .collect()
}
