use crate::schema::*;
use spacetimedb::ViewContext;

/// The caller's habits, newest first.
#[spacetimedb::view(name = my_habits, public)]
pub fn my_habits(ctx: &ViewContext) -> Vec<HabitRow> {
    let mut habits: Vec<HabitRow> = ctx.db.habit().owner().filter(ctx.sender).collect();
    habits.sort_by_key(|h| std::cmp::Reverse(h.id));
    habits
}
