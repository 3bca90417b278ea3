use crate::{
    reducers::refresh_progress::refresh_snapshot, store::ModuleStore, utils::to_utc,
    utils::LogStopwatch,
};
use shared::CompletionOrchestrator;
use spacetimedb::ReducerContext;

/// Completes one of the caller's habits.
///
/// Behavior:
/// - Awards the habit's difficulty experience, recomputing level and stat points.
/// - Advances the habit's streak unless it was already completed today (UTC).
/// - Appends a completion record.
/// - Refreshes the caller's progress snapshot.
///
/// The completion insert, habit update and character update commit together or not at all.
/// Habits have no cooldown: completing one again on the same day is allowed and awards experience.
#[spacetimedb::reducer]
pub fn complete_habit(ctx: &ReducerContext, habit_id: u64) -> Result<(), String> {
    let _sw = LogStopwatch::new(ctx, "complete_habit", 0.01);

    let mut orchestrator = CompletionOrchestrator::new(ModuleStore::new(ctx));
    let receipt = orchestrator
        .complete_habit(&ctx.sender, habit_id, to_utc(ctx.timestamp))
        .map_err(|e| {
            log::warn!("Completion of habit {habit_id} by {:?} failed: {e}", ctx.sender);
            e.to_string()
        })?;

    log::info!(
        "Habit {} completed by {:?}: +{} xp, streak {} (best {})",
        receipt.habit_id,
        ctx.sender,
        receipt.xp_earned,
        receipt.streak.streak,
        receipt.streak.best_streak
    );

    refresh_snapshot(ctx, ctx.sender);
    Ok(())
}
