use crate::{schema::*, utils::to_utc};
use shared::ProgressSummary;
use spacetimedb::{Identity, ReducerContext, Table};

/// Recomputes the caller's progress snapshot.
#[spacetimedb::reducer]
pub fn refresh_progress(ctx: &ReducerContext) -> Result<(), String> {
    if ctx.db.user().identity().find(ctx.sender).is_none() {
        return Err("No profile found".into());
    }
    refresh_snapshot(ctx, ctx.sender);
    Ok(())
}

/// Rebuilds the `progress_snapshot` row for `owner` from their habits and completions.
pub(crate) fn refresh_snapshot(ctx: &ReducerContext, owner: Identity) {
    let habits: Vec<_> = ctx
        .db
        .habit()
        .owner()
        .filter(owner)
        .map(|row| row.to_habit())
        .collect();
    let completions: Vec<_> = ctx
        .db
        .habit_completion()
        .owner()
        .filter(owner)
        .map(|row| row.to_record())
        .collect();

    let summary = ProgressSummary::compute(&habits, &completions, to_utc(ctx.timestamp));
    let snapshot = ProgressSnapshot::new(owner, summary, ctx.timestamp);

    if ctx.db.progress_snapshot().owner().find(owner).is_some() {
        ctx.db.progress_snapshot().owner().update(snapshot);
    } else {
        ctx.db.progress_snapshot().insert(snapshot);
    }
}
