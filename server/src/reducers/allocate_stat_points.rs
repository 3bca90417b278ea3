use crate::{store::ModuleStore, types::DbStat, utils::to_utc};
use shared::CompletionOrchestrator;
use spacetimedb::ReducerContext;

/// Spends the caller's unspent stat points on one primary attribute.
///
/// Behavior:
/// - `hp` and `mp` are rejected regardless of available points.
/// - `points` must be between 1 and the caller's unspent points. Nothing is clamped.
/// - Vitality also raises max and current health by 10 per point; intelligence raises max and
///   current mana by 5 per point.
/// - Appends a `manual_allocation` stat history row.
///
/// On error nothing is written, so unspent points are only consumed once the allocation commits.
#[spacetimedb::reducer]
pub fn allocate_stat_points(ctx: &ReducerContext, stat: DbStat, points: u32) -> Result<(), String> {
    let mut orchestrator = CompletionOrchestrator::new(ModuleStore::new(ctx));
    orchestrator
        .allocate_points(&ctx.sender, stat.into(), points, to_utc(ctx.timestamp))
        .map_err(|e| {
            log::warn!("Allocation of {points} into {stat:?} by {:?} failed: {e}", ctx.sender);
            e.to_string()
        })?;
    Ok(())
}
