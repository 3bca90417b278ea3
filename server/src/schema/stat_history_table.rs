use shared::StatHistoryEntry;
use spacetimedb::*;

/// Append-only audit trail of stat allocations.
#[table(name = stat_history)]
pub struct StatHistoryRow {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    #[index(btree)]
    pub owner: Identity,

    pub stat_name: String,
    pub old_value: u32,
    pub new_value: u32,
    pub change_reason: String,
    pub created_at: Timestamp,
}

impl StatHistoryRow {
    pub fn new(owner: Identity, entry: &StatHistoryEntry, created_at: Timestamp) -> Self {
        Self {
            id: 0,
            owner,
            stat_name: entry.attribute.to_string(),
            old_value: entry.old_value,
            new_value: entry.new_value,
            change_reason: entry.reason.to_string(),
            created_at,
        }
    }
}
