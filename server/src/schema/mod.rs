mod habit_completion_table;
mod habit_table;
mod progress_snapshot_table;
mod progression_rules_table;
mod stat_history_table;
mod user_table;

pub use habit_completion_table::*;
pub use habit_table::*;
pub use progress_snapshot_table::*;
pub use progression_rules_table::*;
pub use stat_history_table::*;
pub use user_table::*;
