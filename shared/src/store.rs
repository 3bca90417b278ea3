//! The storage collaborator seen by the orchestrator.
//!
//! Four logical tables back it: characters, habits, habit completions and stat history. The last
//! two are append-only. Implementations decide how a sequence of calls made by one orchestrator
//! operation is kept atomic (a database transaction, a lock, `&mut self`).

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    AppliedUpdate, CharacterSheet, CharacterUpdate, CompletionRecord, Habit, HabitId, NewHabit,
    OrchestrationError, StatHistoryEntry, StreakState,
};

pub trait ProgressStore {
    /// Whatever the auth collaborator identifies a user by.
    type UserId: ?Sized;
    type Error: std::error::Error + 'static;

    fn character(&self, user: &Self::UserId) -> Result<Option<CharacterSheet>, Self::Error>;

    /// The habit, only if it belongs to `user`.
    fn habit(&self, user: &Self::UserId, habit_id: HabitId) -> Result<Option<Habit>, Self::Error>;

    /// Most recent completion of the habit by `completed_at`.
    fn last_completion(
        &self,
        user: &Self::UserId,
        habit_id: HabitId,
    ) -> Result<Option<CompletionRecord>, Self::Error>;

    fn insert_completion(
        &mut self,
        user: &Self::UserId,
        record: CompletionRecord,
    ) -> Result<(), Self::Error>;

    fn update_habit_streak(
        &mut self,
        user: &Self::UserId,
        habit_id: HabitId,
        streak: StreakState,
    ) -> Result<(), Self::Error>;

    /// Applies `update` to the row as currently stored and persists the result.
    ///
    /// Implementations must read the row they write, never a copy the caller fetched earlier.
    fn update_character(
        &mut self,
        user: &Self::UserId,
        update: CharacterUpdate,
    ) -> Result<AppliedUpdate, OrchestrationError<Self::Error>>;

    fn insert_stat_history(
        &mut self,
        user: &Self::UserId,
        entry: StatHistoryEntry,
        at: DateTime<Utc>,
    ) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryStoreError {
    #[error("no character stored for `{0}`")]
    UnknownCharacter(String),

    #[error("no habit {0} stored for `{1}`")]
    UnknownHabit(HabitId, String),
}

/// A [`ProgressStore`] held entirely in memory, keyed by user name.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    characters: HashMap<String, CharacterSheet>,
    habits: HashMap<HabitId, (String, Habit)>,
    completions: Vec<(String, CompletionRecord)>,
    history: Vec<(String, StatHistoryEntry, DateTime<Utc>)>,
    last_habit_id: HabitId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a character sheet for `user`, replacing any previous one.
    pub fn put_character(&mut self, user: &str, sheet: CharacterSheet) {
        self.characters.insert(user.to_string(), sheet);
    }

    pub fn create_habit(&mut self, user: &str, habit: NewHabit) -> Habit {
        self.last_habit_id += 1;
        let habit = habit.into_habit(self.last_habit_id);
        self.habits.insert(habit.id, (user.to_string(), habit.clone()));
        habit
    }

    /// Replaces a stored habit as-is, for seeding existing streaks.
    pub fn put_habit(&mut self, user: &str, habit: Habit) {
        self.last_habit_id = self.last_habit_id.max(habit.id);
        self.habits.insert(habit.id, (user.to_string(), habit));
    }

    /// Appends a completion without touching streaks or experience, for seeding history.
    pub fn push_completion(&mut self, user: &str, record: CompletionRecord) {
        self.completions.push((user.to_string(), record));
    }

    pub fn habits(&self, user: &str) -> Vec<Habit> {
        let mut habits: Vec<Habit> = self
            .habits
            .values()
            .filter(|(owner, _)| owner == user)
            .map(|(_, habit)| habit.clone())
            .collect();
        habits.sort_by_key(|h| h.id);
        habits
    }

    pub fn completions(&self, user: &str) -> Vec<CompletionRecord> {
        self.completions
            .iter()
            .filter(|(owner, _)| owner == user)
            .map(|(_, record)| *record)
            .collect()
    }

    pub fn history(&self, user: &str) -> Vec<StatHistoryEntry> {
        self.history
            .iter()
            .filter(|(owner, ..)| owner == user)
            .map(|(_, entry, _)| *entry)
            .collect()
    }
}

impl ProgressStore for MemoryStore {
    type UserId = str;
    type Error = MemoryStoreError;

    fn character(&self, user: &str) -> Result<Option<CharacterSheet>, Self::Error> {
        Ok(self.characters.get(user).copied())
    }

    fn habit(&self, user: &str, habit_id: HabitId) -> Result<Option<Habit>, Self::Error> {
        Ok(self
            .habits
            .get(&habit_id)
            .filter(|(owner, _)| owner == user)
            .map(|(_, habit)| habit.clone()))
    }

    fn last_completion(
        &self,
        user: &str,
        habit_id: HabitId,
    ) -> Result<Option<CompletionRecord>, Self::Error> {
        Ok(self
            .completions
            .iter()
            .filter(|(owner, record)| owner == user && record.habit_id == habit_id)
            .map(|(_, record)| *record)
            .max_by_key(|record| record.completed_at))
    }

    fn insert_completion(
        &mut self,
        user: &str,
        record: CompletionRecord,
    ) -> Result<(), Self::Error> {
        self.completions.push((user.to_string(), record));
        Ok(())
    }

    fn update_habit_streak(
        &mut self,
        user: &str,
        habit_id: HabitId,
        streak: StreakState,
    ) -> Result<(), Self::Error> {
        let Some((_, habit)) = self
            .habits
            .get_mut(&habit_id)
            .filter(|(owner, _)| owner == user)
        else {
            return Err(MemoryStoreError::UnknownHabit(habit_id, user.to_string()));
        };
        habit.streak = streak.streak;
        habit.best_streak = streak.best_streak;
        Ok(())
    }

    fn update_character(
        &mut self,
        user: &str,
        update: CharacterUpdate,
    ) -> Result<AppliedUpdate, OrchestrationError<Self::Error>> {
        let Some(stored) = self.characters.get_mut(user) else {
            return Err(OrchestrationError::Store(
                MemoryStoreError::UnknownCharacter(user.to_string()),
            ));
        };
        let applied = update.apply(stored)?;
        *stored = *applied.sheet();
        Ok(applied)
    }

    fn insert_stat_history(
        &mut self,
        user: &str,
        entry: StatHistoryEntry,
        at: DateTime<Utc>,
    ) -> Result<(), Self::Error> {
        self.history.push((user.to_string(), entry, at));
        Ok(())
    }
}
