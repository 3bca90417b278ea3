//! Per-habit streak counting, bucketed by calendar day.

use chrono::{DateTime, NaiveDate, Utc};

/// A habit's current and best streak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakState {
    pub streak: u32,
    pub best_streak: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakTracker;

impl StreakTracker {
    /// The streak after completing a habit on `today`.
    ///
    /// A second completion on the same day leaves the streak alone. Any other completion adds one,
    /// no matter how many days were skipped since `last_completion`.
    pub fn next_streak(
        current: StreakState,
        last_completion: Option<NaiveDate>,
        today: NaiveDate,
    ) -> StreakState {
        let streak = if last_completion == Some(today) {
            current.streak
        } else {
            current.streak.saturating_add(1)
        };

        StreakState {
            streak,
            best_streak: streak.max(current.best_streak),
        }
    }
}

/// The UTC calendar day of a timestamp. Both sides of a streak comparison must go through this.
pub fn calendar_day(at: DateTime<Utc>) -> NaiveDate {
    at.date_naive()
}
