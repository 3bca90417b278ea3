use shared::ProgressSummary;
use spacetimedb::*;

/// Cached progress totals per hunter, rebuilt after each completion and on request.
#[table(name = progress_snapshot)]
pub struct ProgressSnapshot {
    #[primary_key]
    pub owner: Identity,

    pub total_completions: u32,
    pub total_habits: u32,
    pub longest_streak: u32,
    /// Completions in the seven days before `computed_at`.
    pub recent_completions: u32,

    pub computed_at: Timestamp,
}

impl ProgressSnapshot {
    pub fn new(owner: Identity, summary: ProgressSummary, computed_at: Timestamp) -> Self {
        Self {
            owner,
            total_completions: summary.total_completions,
            total_habits: summary.total_habits,
            longest_streak: summary.longest_streak,
            recent_completions: summary.recent_completions,
            computed_at,
        }
    }
}
