use crate::schema::*;
use spacetimedb::ViewContext;

/// The caller's last computed progress snapshot.
///
/// Rebuilt by `complete_habit`, `create_habit` and `refresh_progress`.
#[spacetimedb::view(name = my_progress, public)]
pub fn my_progress(ctx: &ViewContext) -> Option<ProgressSnapshot> {
    ctx.db.progress_snapshot().owner().find(ctx.sender)
}
