use crate::schema::*;
use spacetimedb::ViewContext;

#[spacetimedb::view(name = my_stat_history, public)]
pub fn my_stat_history(ctx: &ViewContext) -> Vec<StatHistoryRow> {
    ctx.db.stat_history().owner().filter(ctx.sender).collect()
}
