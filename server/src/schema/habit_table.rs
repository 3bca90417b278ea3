use crate::types::*;
use shared::{Habit, NewHabit};
use spacetimedb::*;

/// A recurring task owned by one hunter.
#[table(name = habit)]
pub struct HabitRow {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    #[index(btree)]
    pub owner: Identity,

    pub title: String,
    pub description: String,
    pub difficulty: DbDifficulty,

    /// Consecutive distinct days completed.
    pub streak: u32,
    /// Highest `streak` ever reached; always `>= streak`.
    pub best_streak: u32,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl HabitRow {
    /// A row ready for insertion. `id` is assigned by the table.
    pub fn new(owner: Identity, habit: NewHabit, now: Timestamp) -> Self {
        Self {
            id: 0,
            owner,
            title: habit.title,
            description: habit.description,
            difficulty: habit.difficulty.into(),
            streak: 0,
            best_streak: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_habit(&self) -> Habit {
        Habit {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            difficulty: self.difficulty.into(),
            streak: self.streak,
            best_streak: self.best_streak,
        }
    }
}
