//! Derived metrics over a single habit's progress.
//!
//! `total_score` is the cumulative credit persisted as `longestStreak`; it is
//! not a consecutive-run length. `current_streak` is the consecutive-run
//! figure shown next to each row. Both exist and are computed independently.

use super::{DayStatus, Progress};

/// Sum of per-day credit over every explicitly set day.
pub fn total_score(progress: &Progress) -> f64 {
    progress.iter().map(|(_, status)| status.score()).sum()
}

/// Percentage of credit earned over tracked days, rounded to the nearest
/// integer. Failed days are tracked with zero credit; unset days are not
/// tracked at all. Returns 0 when nothing is tracked.
pub fn success_rate(progress: &Progress) -> u32 {
    let tracked = progress.tracked();
    if tracked == 0 {
        return 0;
    }
    let rate = 100.0 * total_score(progress) / tracked as f64;
    rate.round() as u32
}

/// Run of credit ending at the most recent complete-or-failed day.
///
/// Scans `day_count..=1` for the last day marked `Complete` or `Failed`, then
/// walks backward from it adding each day's credit until a `Failed` or unset
/// day is reached. Entries past `day_count` are ignored.
pub fn current_streak(progress: &Progress, day_count: u32) -> f64 {
    let anchor = (1..=day_count)
        .rev()
        .find(|day| matches!(progress.get(*day), DayStatus::Complete | DayStatus::Failed));

    let Some(anchor) = anchor else {
        return 0.0;
    };

    let mut streak = 0.0;
    for day in (1..=anchor).rev() {
        match progress.get(day) {
            status @ (DayStatus::Complete | DayStatus::Half) => streak += status.score(),
            DayStatus::Failed | DayStatus::Unset => break,
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn progress(entries: &[(u32, DayStatus)]) -> Progress {
        entries.iter().copied().collect()
    }

    #[test]
    fn total_score_weights_half_credit() {
        let p = progress(&[
            (1, DayStatus::Complete),
            (2, DayStatus::Half),
            (3, DayStatus::Failed),
        ]);
        assert_eq!(total_score(&p), 1.5);
    }

    #[test]
    fn success_rate_counts_failed_in_denominator() {
        let p = progress(&[
            (1, DayStatus::Complete),
            (2, DayStatus::Half),
            (3, DayStatus::Failed),
        ]);
        assert_eq!(success_rate(&p), 50);
    }

    #[test]
    fn success_rate_of_nothing_is_zero() {
        assert_eq!(success_rate(&Progress::new()), 0);
    }

    #[test]
    fn failed_differs_from_blank() {
        let blank = progress(&[(1, DayStatus::Complete)]);
        let failed = progress(&[(1, DayStatus::Complete), (2, DayStatus::Failed)]);
        assert_eq!(success_rate(&blank), 100);
        assert_eq!(success_rate(&failed), 50);
    }

    #[test]
    fn success_rate_rounds_half_up() {
        // 1.5 / 2 = 75%, 2 / 3 = 66.67% -> 67
        let p = progress(&[(1, DayStatus::Complete), (2, DayStatus::Half)]);
        assert_eq!(success_rate(&p), 75);
        let p = progress(&[
            (1, DayStatus::Complete),
            (2, DayStatus::Complete),
            (3, DayStatus::Failed),
        ]);
        assert_eq!(success_rate(&p), 67);
    }

    #[test]
    fn current_streak_stops_at_failed() {
        let p = progress(&[
            (1, DayStatus::Complete),
            (2, DayStatus::Failed),
            (3, DayStatus::Complete),
            (4, DayStatus::Half),
            (5, DayStatus::Complete),
        ]);
        assert_eq!(current_streak(&p, 31), 2.5);
    }

    #[test]
    fn current_streak_ignores_trailing_unset_days() {
        let p = progress(&[(1, DayStatus::Complete), (2, DayStatus::Complete)]);
        assert_eq!(current_streak(&p, 31), 2.0);
        assert_eq!(current_streak(&p, 2), 2.0);
    }

    #[test]
    fn current_streak_is_zero_when_last_marked_day_failed() {
        let p = progress(&[(1, DayStatus::Complete), (2, DayStatus::Failed)]);
        assert_eq!(current_streak(&p, 30), 0.0);
    }

    #[test]
    fn current_streak_stops_at_gap() {
        let p = progress(&[(1, DayStatus::Complete), (3, DayStatus::Complete)]);
        assert_eq!(current_streak(&p, 31), 1.0);
    }

    #[test]
    fn current_streak_anchors_on_complete_or_failed_only() {
        // Trailing half days do not move the anchor.
        let p = progress(&[
            (1, DayStatus::Complete),
            (2, DayStatus::Complete),
            (3, DayStatus::Half),
        ]);
        assert_eq!(current_streak(&p, 31), 2.0);

        let only_half = progress(&[(1, DayStatus::Half)]);
        assert_eq!(current_streak(&only_half, 31), 0.0);
    }

    #[test]
    fn current_streak_ignores_days_past_month_end() {
        let p = progress(&[(28, DayStatus::Complete), (31, DayStatus::Failed)]);
        assert_eq!(current_streak(&p, 28), 1.0);
        assert_eq!(current_streak(&p, 31), 0.0);
    }

    #[test]
    fn current_streak_is_distinct_from_total_score() {
        let p = progress(&[
            (1, DayStatus::Complete),
            (2, DayStatus::Complete),
            (3, DayStatus::Failed),
            (4, DayStatus::Complete),
        ]);
        assert_eq!(total_score(&p), 3.0);
        assert_eq!(current_streak(&p, 31), 1.0);
    }

    fn any_progress() -> impl Strategy<Value = Progress> {
        prop::collection::btree_map(
            1u32..=40,
            prop::sample::select(DayStatus::ALL.to_vec()),
            0..40,
        )
        .prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        #[test]
        fn success_rate_stays_within_bounds(p in any_progress()) {
            prop_assert!(success_rate(&p) <= 100);
        }

        #[test]
        fn total_score_never_exceeds_tracked(p in any_progress()) {
            prop_assert!(total_score(&p) <= p.tracked() as f64);
        }

        #[test]
        fn streak_never_exceeds_total(p in any_progress(), days in 28u32..=31) {
            prop_assert!(current_streak(&p, days) <= total_score(&p));
        }
    }
}
