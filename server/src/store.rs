//! [`ProgressStore`] over the module's tables.
//!
//! Every method runs inside the calling reducer's transaction, so a reducer that drives a
//! [`shared::CompletionOrchestrator`] and then returns `Err` leaves no partial writes behind.

use crate::schema::*;
use crate::utils::to_timestamp;
use chrono::{DateTime, Utc};
use shared::{
    AppliedUpdate, CharacterSheet, CharacterUpdate, CompletionRecord, Habit, HabitId,
    OrchestrationError, ProgressStore, StatHistoryEntry, StreakState,
};
use spacetimedb::{Identity, ReducerContext, Table};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no user row for {0:?}")]
    MissingUser(Identity),

    #[error("habit {0} does not exist for this user")]
    MissingHabit(HabitId),
}

pub struct ModuleStore<'a> {
    ctx: &'a ReducerContext,
}

impl<'a> ModuleStore<'a> {
    pub fn new(ctx: &'a ReducerContext) -> Self {
        Self { ctx }
    }
}

impl ProgressStore for ModuleStore<'_> {
    type UserId = Identity;
    type Error = StoreError;

    fn character(&self, user: &Identity) -> Result<Option<CharacterSheet>, StoreError> {
        Ok(self
            .ctx
            .db
            .user()
            .identity()
            .find(*user)
            .map(|row| row.sheet()))
    }

    fn habit(&self, user: &Identity, habit_id: HabitId) -> Result<Option<Habit>, StoreError> {
        Ok(self
            .ctx
            .db
            .habit()
            .id()
            .find(habit_id)
            .filter(|row| row.owner == *user)
            .map(|row| row.to_habit()))
    }

    fn last_completion(
        &self,
        user: &Identity,
        habit_id: HabitId,
    ) -> Result<Option<CompletionRecord>, StoreError> {
        Ok(self
            .ctx
            .db
            .habit_completion()
            .habit_id()
            .filter(habit_id)
            .filter(|row| row.owner == *user)
            .max_by_key(|row| row.completed_at.to_micros_since_unix_epoch())
            .map(|row| row.to_record()))
    }

    fn insert_completion(
        &mut self,
        user: &Identity,
        record: CompletionRecord,
    ) -> Result<(), StoreError> {
        self.ctx
            .db
            .habit_completion()
            .insert(HabitCompletionRow::new(*user, &record));
        Ok(())
    }

    fn update_habit_streak(
        &mut self,
        user: &Identity,
        habit_id: HabitId,
        streak: StreakState,
    ) -> Result<(), StoreError> {
        let Some(mut row) = self
            .ctx
            .db
            .habit()
            .id()
            .find(habit_id)
            .filter(|row| row.owner == *user)
        else {
            log::error!("Habit {habit_id} vanished mid-transaction for {user:?}");
            return Err(StoreError::MissingHabit(habit_id));
        };

        row.streak = streak.streak;
        row.best_streak = streak.best_streak;
        row.updated_at = self.ctx.timestamp;
        self.ctx.db.habit().id().update(row);
        Ok(())
    }

    fn update_character(
        &mut self,
        user: &Identity,
        update: CharacterUpdate,
    ) -> Result<AppliedUpdate, OrchestrationError<StoreError>> {
        // Re-read inside the transaction; the update is applied to this row, not a caller's copy.
        let Some(mut row) = self.ctx.db.user().identity().find(*user) else {
            return Err(OrchestrationError::Store(StoreError::MissingUser(*user)));
        };

        let applied = update.apply(&row.sheet())?;
        row.set_sheet(applied.sheet());
        row.updated_at = self.ctx.timestamp;
        self.ctx.db.user().identity().update(row);
        Ok(applied)
    }

    fn insert_stat_history(
        &mut self,
        user: &Identity,
        entry: StatHistoryEntry,
        at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        self.ctx
            .db
            .stat_history()
            .insert(StatHistoryRow::new(*user, &entry, to_timestamp(at)));
        Ok(())
    }
}
