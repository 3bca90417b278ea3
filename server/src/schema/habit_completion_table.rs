use crate::utils::{to_timestamp, to_utc};
use shared::CompletionRecord;
use spacetimedb::*;

/// Append-only log of habit completions.
///
/// The newest row per habit decides whether the next completion extends its streak.
#[table(name = habit_completion)]
pub struct HabitCompletionRow {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    #[index(btree)]
    pub habit_id: u64,

    #[index(btree)]
    pub owner: Identity,

    pub completed_at: Timestamp,

    /// Experience awarded at the time of completion.
    pub xp_earned: u32,
}

impl HabitCompletionRow {
    pub fn new(owner: Identity, record: &CompletionRecord) -> Self {
        Self {
            id: 0,
            habit_id: record.habit_id,
            owner,
            completed_at: to_timestamp(record.completed_at),
            xp_earned: record.xp_earned,
        }
    }

    pub fn to_record(&self) -> CompletionRecord {
        CompletionRecord {
            habit_id: self.habit_id,
            completed_at: to_utc(self.completed_at),
            xp_earned: self.xp_earned,
        }
    }
}
