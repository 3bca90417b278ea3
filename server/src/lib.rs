mod reducers {
    pub mod allocate_stat_points;
    pub mod complete_habit;
    mod connection;
    pub mod create_habit;
    pub mod refresh_progress;
    pub mod update_profile;
}
pub mod schema;
mod store;
pub mod types;
mod utils;
pub mod views;

use crate::schema::*;
use spacetimedb::*;

/// Seeds the public copy of the progression tables. Re-running replaces it.
#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    ctx.db.progression_rules().id().delete(ProgressionRules::ID);
    ctx.db.progression_rules().insert(ProgressionRules::current());
    log::info!(
        "Progression rules seeded ({} levels)",
        shared::LevelTable::max_level()
    );
}
