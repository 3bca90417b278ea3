use crate::{reducers::refresh_progress::refresh_snapshot, schema::*, types::DbDifficulty};
use shared::NewHabit;
use spacetimedb::{ReducerContext, Table};

/// Creates a habit for the caller.
///
/// Behavior:
/// - Requires the caller to have a profile.
/// - Trims `title`/`description` and rejects an empty title.
/// - `difficulty` defaults to medium.
/// - The habit starts with no streak.
#[spacetimedb::reducer]
pub fn create_habit(
    ctx: &ReducerContext,
    title: String,
    description: String,
    difficulty: Option<DbDifficulty>,
) -> Result<(), String> {
    if ctx.db.user().identity().find(ctx.sender).is_none() {
        return Err("No profile found".into());
    }

    let habit = NewHabit::new(&title, &description, difficulty.map(Into::into)).map_err(|e| {
        log::warn!("Rejected habit from {:?}: {e}", ctx.sender);
        e.to_string()
    })?;

    let row = ctx
        .db
        .habit()
        .insert(HabitRow::new(ctx.sender, habit, ctx.timestamp));
    log::info!("Habit {} created by {:?}", row.id, ctx.sender);

    refresh_snapshot(ctx, ctx.sender);
    Ok(())
}
