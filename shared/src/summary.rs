use chrono::{DateTime, Duration, Utc};

use crate::constants::RECENT_COMPLETION_DAYS;
use crate::{CompletionRecord, Habit};

/// Totals shown on a hunter's progress screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total_completions: u32,
    pub total_habits: u32,
    /// Best streak ever reached on any habit.
    pub longest_streak: u32,
    /// Completions within the last [`RECENT_COMPLETION_DAYS`] days of `now`.
    pub recent_completions: u32,
}

impl ProgressSummary {
    pub fn compute<'a>(
        habits: impl IntoIterator<Item = &'a Habit>,
        completions: impl IntoIterator<Item = &'a CompletionRecord>,
        now: DateTime<Utc>,
    ) -> Self {
        let window_start = now - Duration::days(RECENT_COMPLETION_DAYS);

        let mut summary = Self::default();
        for habit in habits {
            summary.total_habits += 1;
            summary.longest_streak = summary.longest_streak.max(habit.best_streak);
        }
        for completion in completions {
            summary.total_completions += 1;
            if completion.completed_at >= window_start {
                summary.recent_completions += 1;
            }
        }
        summary
    }
}
